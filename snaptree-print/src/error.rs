//! Error types for printing operations

use std::fmt;

/// Errors that can occur while printing a value
#[derive(Debug, Clone, PartialEq)]
pub enum PrintError {
    /// An eligible AST node violated the caller contract: its `range` or `loc`
    /// is missing or has a shape the fixed trailing block cannot render.
    MalformedNode(String),
}

impl fmt::Display for PrintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintError::MalformedNode(msg) => write!(f, "Malformed AST node: {msg}"),
        }
    }
}

impl std::error::Error for PrintError {}
