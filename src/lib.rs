//! Parser and multi-format renderer for HEEx templates.
//!
//! HEEx is Phoenix LiveView's HTML-with-embedded-Elixir template
//! dialect. This crate parses a template string into a [`Document`] tree
//! that keeps every syntactic distinction HEEx draws - ordinary HTML
//! elements, function components (`<.button>`, `<MyApp.Button>`), named
//! slots (`<:header>`, with `:let` bindings), curly interpolations
//! (`{@name}`), classical EEx (`<% %>`, `<%= %>`, `<%# %>`, and blocks
//! with `do`/`else`/`->`/`end` clauses), and HTML comments - and renders
//! the tree back out in three forms: round-trippable HEEx source, an
//! indented debug dump, and compact JSON.
//!
//! # Pipeline
//!
//! Input flows through two stages. A single-pass scanner disambiguates
//! the overlapping bracket syntaxes into a flat token stream; a
//! recursive-descent tree builder then reconciles void elements,
//! component close matching, slot routing, and EEx block structure.
//! Expression bodies stay opaque text throughout - nothing here
//! evaluates Elixir.
//!
//! Both stages accumulate diagnostics and fail collectively: a parse
//! either yields a complete tree or a single [`Error`] carrying every
//! message, never a partial tree.
//!
//! # Example
//!
//! ```
//! let doc = heex_parser::parse("<div class=\"box\">{@name}</div>").unwrap();
//! assert_eq!(
//!     heex_parser::render_html(&doc),
//!     "<div class=\"box\">{@name}</div>",
//! );
//! ```

mod ast;
mod error;
mod parser;
mod render;
mod scanner;
mod token;

pub use ast::{
    is_void_element, Attribute, ClauseType, ComponentType, Document, EExClause, EExType,
    Expression, Node, Slot,
};
pub use error::Error;
pub use render::{render_debug, render_html, render_json};
pub use token::{Location, Span, Token, TokenKind};

/// Tokenizes a template without building a tree.
///
/// The stream is always terminated by a [`TokenKind::Eof`] token. A
/// rejected input returns one composite [`Error::Scan`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    scanner::Scanner::new(input).tokenize()
}

/// Parses a template into a document tree.
pub fn parse(input: &str) -> Result<Document, Error> {
    parser::parse(input)
}

/// Parses a template and renders it straight back to HEEx source.
pub fn parse_and_render(input: &str) -> Result<String, Error> {
    Ok(render_html(&parse(input)?))
}

/// Parses a template, keeping only the verdict.
pub fn parse_and_validate(input: &str) -> Result<(), Error> {
    parse(input).map(|_| ())
}
