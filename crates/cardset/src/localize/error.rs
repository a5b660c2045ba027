//! Parse error types for translation files.

use thiserror::Error;

/// An error that occurred while parsing a translation file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// The same key is defined twice.
    #[error("duplicate key '{key}' at {line}:{column}")]
    DuplicateKey {
        key: String,
        line: usize,
        column: usize,
    },
}

impl ParseError {
    /// Line and column the error points at.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. } | ParseError::DuplicateKey { line, column, .. } => {
                (*line, *column)
            }
        }
    }
}
