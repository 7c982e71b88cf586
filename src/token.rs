//! Token vocabulary shared by the scanner and the tree builder.

use std::fmt;

/// A position in the template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1.
    pub column: u32,
    /// Byte offset into the input, starting at 0.
    pub offset: usize,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A source region between two locations.
///
/// Spans are informational; nothing in parsing or rendering depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Where the region starts.
    pub start: Location,
    /// Where the region ends (exclusive).
    pub end: Location,
}

/// All token kinds in the HEEx grammar.
///
/// The scanner resolves the overlapping bracket syntaxes (`<`, `</`, `<.`,
/// `<:`, `<%`, `<!--`, `{`) into this flat vocabulary; the tree builder
/// never looks at raw input again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of plain text, entity-decoded.
    Text,
    /// `<name` for an ordinary HTML element.
    TagOpen,
    /// `</name>` for an ordinary HTML element.
    TagClose,
    /// `/>` terminating an open tag.
    TagSelfClose,
    /// `>` terminating an open tag.
    TagEnd,
    /// `<.name` or `<Module.Name`; the value keeps the leading `.` for
    /// local components.
    ComponentOpen,
    /// `</.name>` or `</Module.Name>`.
    ComponentClose,
    /// `<:name`; the value carries the name without the colon.
    SlotOpen,
    /// `</:name>`.
    SlotClose,
    /// An attribute name, with its leading `:` kept for special attributes.
    AttrName,
    /// `=` between an attribute name and its value.
    AttrEquals,
    /// A quoted or unquoted attribute value, entity-decoded.
    AttrValue,
    /// `{` opening an interpolated expression.
    ExprOpen,
    /// The opaque body of an interpolated expression.
    ExprContent,
    /// `}` closing an interpolated expression.
    ExprClose,
    /// `<%` opening an EEx execution block.
    EexOpen,
    /// `<%=` opening an EEx output expression.
    EexOutput,
    /// `<%#` opening an EEx comment.
    EexComment,
    /// The trimmed body of an EEx construct.
    EexContent,
    /// `%>` closing an EEx construct.
    EexClose,
    /// `<!--` opening an HTML comment.
    CommentOpen,
    /// The verbatim body of an HTML comment.
    CommentContent,
    /// `-->` closing an HTML comment.
    CommentClose,
    /// End of input; the scanner always emits this last.
    Eof,
}

impl TokenKind {
    /// The snake_case name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TagOpen => "tag_open",
            Self::TagClose => "tag_close",
            Self::TagSelfClose => "tag_self_close",
            Self::TagEnd => "tag_end",
            Self::ComponentOpen => "component_open",
            Self::ComponentClose => "component_close",
            Self::SlotOpen => "slot_open",
            Self::SlotClose => "slot_close",
            Self::AttrName => "attr_name",
            Self::AttrEquals => "attr_equals",
            Self::AttrValue => "attr_value",
            Self::ExprOpen => "expr_open",
            Self::ExprContent => "expr_content",
            Self::ExprClose => "expr_close",
            Self::EexOpen => "eex_open",
            Self::EexOutput => "eex_output",
            Self::EexComment => "eex_comment",
            Self::EexContent => "eex_content",
            Self::EexClose => "eex_close",
            Self::CommentOpen => "comment_open",
            Self::CommentContent => "comment_content",
            Self::CommentClose => "comment_close",
            Self::Eof => "eof",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The token's literal value; what it means depends on the kind.
    pub value: String,
    /// Where the token sits in the source.
    pub span: Span,
}
