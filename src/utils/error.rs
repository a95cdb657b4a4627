//! Error handling for Typokit
//!
//! This module provides a unified error type and result type for the
//! punctuation and table operations.

use thiserror::Error;

/// Conversion error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Invalid input - a caller-supplied value violates the operation's contract
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
    /// IO error (for file and terminal operations)
    #[error("IO error: {message}")]
    IoError { message: String },
}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

// Convenience constructors for errors
impl ConversionError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            message: message.into(),
        }
    }

    /// Whether this error reports bad caller input (as opposed to I/O)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ConversionError::InvalidInput { .. })
    }
}
