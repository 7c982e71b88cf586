//! The crate's single failure type.
//!
//! Both pipeline stages accumulate diagnostics into a list and raise once
//! at the end, so a caller sees every problem in one aggregated error
//! instead of the first one hit. Scanner messages are prefixed
//! `line:column: `; tree-builder messages are prefixed with the byte
//! offset of the offending token.

use thiserror::Error;

/// A composite parse failure carrying every accumulated diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The scanner rejected the input. No token stream is produced.
    #[error("{}", .0.join("\n"))]
    Scan(Vec<String>),
    /// The tree builder rejected the token stream. No tree is produced.
    #[error("{}", .0.join("\n"))]
    Parse(Vec<String>),
}

impl Error {
    /// The individual diagnostic messages, in the order they were found.
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Scan(messages) | Self::Parse(messages) => messages,
        }
    }
}
