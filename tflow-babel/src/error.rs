//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    /// Format does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),

    /// A format option outside its accepted range
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// A non-blank T-Flow line that does not start with a known marker
    #[error("Invalid T-Flow line {line_number} (no marker): {line:?}")]
    MalformedLine { line_number: usize, line: String },

    /// A JSONL line that is not a JSON object
    #[error("Invalid record on line {line_number}: {message}: {line:?}")]
    MalformedRecord {
        line_number: usize,
        line: String,
        message: String,
    },

    /// Reading the input or writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
