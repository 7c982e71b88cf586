//! Tree builder: token stream → [`Document`].
//!
//! A recursive-descent pass over the scanner's output. The builder needs
//! one token of lookahead everywhere except EEx clause detection, which
//! peeks at the content token behind an `<%`/`<%=` opener. Like the
//! scanner it accumulates diagnostics and raises once at the end, so a
//! malformed template reports every problem instead of the first.

mod component;
mod eex;
mod element;

use crate::ast::{Document, EExType, Expression, Node};
use crate::error::Error;
use crate::scanner::Scanner;
use crate::token::{Span, Token, TokenKind};

/// Parses a template into a document tree.
pub fn parse(input: &str) -> Result<Document, Error> {
    let tokens = Scanner::new(input).tokenize()?;
    TreeBuilder::new(tokens).build()
}

/// Builds the tree from a scanned token stream.
pub(crate) struct TreeBuilder {
    tokens: Vec<Token>,
    pos: usize,
    /// Diagnostics produced so far, each prefixed with a byte offset.
    errors: Vec<String>,
}

impl TreeBuilder {
    pub(crate) fn new(mut tokens: Vec<Token>) -> Self {
        // The scanner always terminates the stream; keep that invariant
        // for streams built by hand.
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            tokens.push(Token {
                kind: TokenKind::Eof,
                value: String::new(),
                span: Span::default(),
            });
        }
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Consumes the whole stream into a document.
    pub(crate) fn build(mut self) -> Result<Document, Error> {
        let mut children = Vec::new();
        loop {
            children.append(&mut self.parse_children());
            match self.current().kind {
                TokenKind::Eof => break,
                // A close token with no matching opener. Report it and
                // keep collecting siblings rather than dropping the rest
                // of the input.
                _ => {
                    let stray = self.advance();
                    let message = format!("Unexpected closing tag {}", display_close(&stray));
                    self.error_at(&stray, message);
                }
            }
        }
        if self.errors.is_empty() {
            Ok(Document { children })
        } else {
            Err(Error::Parse(self.errors))
        }
    }

    // =========================================================================
    // Token navigation
    // =========================================================================

    /// The token at the cursor; past the end this is the final `eof`.
    fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the current token and moves past it.
    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Advances past a token of the expected kind, or records a
    /// diagnostic and stays put.
    fn expect(&mut self, kind: TokenKind) {
        if self.check(kind) {
            self.advance();
        } else {
            let found = self.current().kind;
            self.error(format!("Expected {kind}, got {found}"));
        }
    }

    /// Records a diagnostic at the current token.
    fn error(&mut self, message: impl Into<String>) {
        let offset = self.current().span.start.offset;
        self.errors.push(format!("{offset}: {}", message.into()));
    }

    /// Records a diagnostic at an already-consumed token.
    fn error_at(&mut self, token: &Token, message: impl Into<String>) {
        self.errors
            .push(format!("{}: {}", token.span.start.offset, message.into()));
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Parses sibling nodes until a close token or end of input. The
    /// caller owns matching whatever close token stopped the loop.
    fn parse_children(&mut self) -> Vec<Node> {
        self.collect_children(false)
    }

    fn collect_children(&mut self, stop_at_clause: bool) -> Vec<Node> {
        let mut nodes = Vec::new();
        loop {
            match self.current().kind {
                TokenKind::TagClose
                | TokenKind::ComponentClose
                | TokenKind::SlotClose
                | TokenKind::Eof => break,
                _ => {}
            }
            if stop_at_clause && self.at_clause_boundary() {
                break;
            }
            if let Some(node) = self.parse_node() {
                nodes.push(node);
            }
        }
        nodes
    }

    /// Parses the single node starting at the cursor. Returns `None` when
    /// the token cannot begin a node; the token is skipped with a
    /// diagnostic so the pass always makes progress.
    fn parse_node(&mut self) -> Option<Node> {
        match self.current().kind {
            TokenKind::Text => {
                let token = self.advance();
                Some(Node::Text {
                    content: token.value,
                })
            }
            TokenKind::TagOpen => Some(self.parse_element()),
            TokenKind::ComponentOpen => Some(self.parse_component()),
            TokenKind::SlotOpen => Some(Node::Slot(self.parse_slot())),
            TokenKind::ExprOpen => Some(Node::Expression(self.parse_expression())),
            TokenKind::EexOpen => Some(self.parse_eex(EExType::Exec)),
            TokenKind::EexOutput => Some(self.parse_eex(EExType::Output)),
            TokenKind::EexComment => Some(self.parse_eex(EExType::Comment)),
            TokenKind::CommentOpen => Some(self.parse_comment()),
            other => {
                self.error(format!("Unexpected token {other}"));
                self.advance();
                None
            }
        }
    }

    // =========================================================================
    // Leaves
    // =========================================================================

    /// Parses `{ code }` into an expression.
    fn parse_expression(&mut self) -> Expression {
        self.advance(); // expr_open
        let code = if self.check(TokenKind::ExprContent) {
            self.advance().value
        } else {
            String::new()
        };
        self.expect(TokenKind::ExprClose);
        Expression { code }
    }

    fn parse_comment(&mut self) -> Node {
        self.advance(); // comment_open
        let content = if self.check(TokenKind::CommentContent) {
            self.advance().value
        } else {
            String::new()
        };
        self.expect(TokenKind::CommentClose);
        Node::Comment { content }
    }
}

/// Source form of a close token, for diagnostics.
fn display_close(token: &Token) -> String {
    match token.kind {
        TokenKind::SlotClose => format!("</:{}>", token.value),
        _ => format!("</{}>", token.value),
    }
}
