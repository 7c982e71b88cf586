//! Tree model for parsed HEEx templates.
//!
//! The tree is a pure ownership hierarchy: every node is created by the
//! tree builder, immutable afterwards, and freed when the owning
//! [`Document`] drops. There are no back-references and no shared
//! subtrees, so documents move freely across threads.

// =============================================================================
// Supporting enums
// =============================================================================

/// Whether a component refers to a local function or a remote module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    /// `<.button>` - resolved against the enclosing module.
    Local,
    /// `<MyApp.Button>` - a fully qualified module path.
    Remote,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

/// The flavor of a classical EEx construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EExType {
    /// `<%= … %>` - emits a value.
    Output,
    /// `<% … %>` - executes without emitting.
    Exec,
    /// `<%# … %>` - a comment.
    Comment,
}

impl EExType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Output => "output",
            Self::Exec => "exec",
            Self::Comment => "comment",
        }
    }
}

/// The role of a clause inside an [`Node::EExBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseType {
    /// The initial `do` body.
    Do,
    /// An `<% else %>` branch.
    Else,
    /// The terminating `<% end %>`; carries no children.
    End,
    /// A `case`/`cond` arm such as `<% :ok -> %>`.
    Arrow,
}

impl ClauseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Do => "do",
            Self::Else => "else",
            Self::End => "end",
            Self::Arrow => "->",
        }
    }
}

// =============================================================================
// Tree nodes
// =============================================================================

/// An opaque embedded expression, as written between `{` and `}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// The expression source text. Never parsed, never evaluated.
    pub code: String,
}

/// One attribute on an element, component, or slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// `name="value"`, or a bare boolean attribute stored as `"true"`.
    Static { name: String, value: String },
    /// `name={expression}`.
    Dynamic { name: String, expression: Expression },
    /// A bare `{expression}` in attribute position, merging a map of
    /// attributes into the tag.
    Spread { expression: Expression },
    /// `:if={…}`, `:for={…}`, `:key={…}`, `:let={…}`; the stored kind
    /// drops the leading colon.
    Special { kind: String, expression: Expression },
}

/// A named hole in a component body, written `<:name>…</:name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// The slot name, without the leading colon.
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
    /// The `:let` binding, when the slot declares one.
    pub let_binding: Option<String>,
}

/// One clause of an EEx block: the initial `do` body, an `else` branch,
/// a `->` arm, or the closing `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EExClause {
    pub clause_type: ClauseType,
    /// The arm head for `->` clauses; absent for `do`/`else`/`end`.
    pub expression: Option<String>,
    pub children: Vec<Node>,
}

/// A node in the template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A run of plain text.
    Text { content: String },
    /// An ordinary HTML element.
    Element {
        tag: String,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
        /// True when the element was written `/>` or its tag is void.
        /// Implies empty children.
        self_closing: bool,
    },
    /// A function component, local (`<.button>`) or remote
    /// (`<MyApp.Button>`). Slot children are routed into `slots`; every
    /// other body node lands in `children`, in source order.
    Component {
        component_type: ComponentType,
        /// Keeps the leading `.` for local components.
        name: String,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
        slots: Vec<Slot>,
    },
    /// A slot outside a component body. Inside one, slots live on the
    /// component node instead.
    Slot(Slot),
    /// A curly-brace interpolation `{…}`.
    Expression(Expression),
    /// A classical EEx construct without block structure.
    EEx { eex_type: EExType, code: String },
    /// An EEx block such as `<%= if … do %> … <% end %>`.
    EExBlock {
        /// The leading keyword: `if`, `for`, `case`, `cond`, or `unless`.
        block_type: String,
        /// The head expression, with any trailing ` do` removed.
        expression: String,
        clauses: Vec<EExClause>,
    },
    /// An HTML comment; the content is kept verbatim.
    Comment { content: String },
}

/// A parsed template: the sequence of top-level nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub children: Vec<Node>,
}

// =============================================================================
// Void elements
// =============================================================================

/// HTML elements that admit no children and no closing tag.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Returns true for HTML void elements. Matching is case-insensitive.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| tag.eq_ignore_ascii_case(v))
}
