//! Scanner for HEEx templates.
//!
//! The scanner turns the template text into a flat token stream in a
//! single left-to-right pass, disambiguating the overlapping
//! bracket-delimited syntaxes: ordinary tags, closing tags, local and
//! remote components, named slots, curly interpolations, the three EEx
//! forms, and HTML comments. The cursor never moves backward; every
//! decision is made from single-character lookahead at the current
//! position.
//!
//! Diagnostics accumulate instead of aborting the pass. At the end the
//! scanner either returns the full stream (always terminated by an `eof`
//! token) or one [`Error`] carrying every message.

mod attribute;
mod comment;
mod eex;
mod expression;
mod tag;
#[cfg(test)]
mod tests;

use crate::error::Error;
use crate::token::{Location, Span, Token, TokenKind};

/// The five escape sequences the scanner decodes in text and attribute
/// values. Anything else after `&` passes through verbatim.
const ENTITIES: [(&str, char); 5] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
];

/// The scanner for HEEx template input.
pub struct Scanner {
    /// The template text.
    input: String,
    /// Current byte position in the input.
    pos: usize,
    /// Current line, starting at 1.
    line: u32,
    /// Current column, starting at 1.
    column: u32,
    /// Tokens produced so far.
    tokens: Vec<Token>,
    /// Diagnostics produced so far, each prefixed `line:column: `.
    errors: Vec<String>,
}

impl Scanner {
    /// Creates a new scanner over the given input.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenizes the entire input.
    ///
    /// Returns the token stream, or a composite error when any diagnostic
    /// accumulated; a rejected input never yields a partial stream.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Error> {
        while !self.at_eof() {
            self.scan_next();
        }
        let at = self.location();
        self.push_token(TokenKind::Eof, "", at);
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(Error::Scan(self.errors))
        }
    }

    /// Dispatches on the construct starting at the cursor.
    fn scan_next(&mut self) {
        if self.remaining().starts_with("<%") {
            self.scan_eex();
        } else if self.remaining().starts_with("<!--") {
            self.scan_comment();
        } else if self.peek() == Some('<') {
            self.scan_tag();
        } else if self.peek() == Some('{') {
            self.scan_expression();
        } else {
            self.scan_text();
        }
    }

    /// Text path: a run of characters up to the next construct opener.
    fn scan_text(&mut self) {
        let start = self.location();
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c == '<' || c == '{' {
                break;
            }
            self.bump_decoded(&mut text);
        }
        if !text.is_empty() {
            self.push_token(TokenKind::Text, text, start);
        }
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    /// The unconsumed remainder of the input.
    fn remaining(&self) -> &str {
        &self.input[self.pos..]
    }

    /// Peeks at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset: self.pos,
        }
    }

    /// Consumes one character, keeping line and column current.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes n characters; used for fixed ASCII markers like `<%`.
    fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    /// Consumes the next character when it matches.
    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    /// Consumes one character into the buffer, decoding an escape
    /// sequence when one starts at the cursor.
    fn bump_decoded(&mut self, buf: &mut String) {
        if self.peek() == Some('&') {
            for (entity, decoded) in ENTITIES {
                if self.remaining().starts_with(entity) {
                    self.bump_n(entity.len());
                    buf.push(decoded);
                    return;
                }
            }
        }
        if let Some(c) = self.bump() {
            buf.push(c);
        }
    }

    /// Reads a tag, component, slot, or attribute name. Names start with
    /// an ASCII letter or `_` and continue with letters, digits, `_`,
    /// `-`, or `.`; an empty result means no name was present.
    fn read_name(&mut self) -> String {
        let mut name = String::new();
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                name.push(c);
                self.bump();
            }
            _ => return name,
        }
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                name.push(c);
                self.bump();
            } else {
                break;
            }
        }
        name
    }

    // =========================================================================
    // Output
    // =========================================================================

    fn push_token(&mut self, kind: TokenKind, value: impl Into<String>, start: Location) {
        let span = Span {
            start,
            end: self.location(),
        };
        self.tokens.push(Token {
            kind,
            value: value.into(),
            span,
        });
    }

    fn error_at(&mut self, at: Location, message: &str) {
        self.errors.push(format!("{}:{}: {}", at.line, at.column, message));
    }
}
