//! Error types for instance generation and the instance text format.

use std::io;

use thiserror::Error;

/// Errors produced while generating or writing an instance.
#[derive(Debug, Error)]
pub enum Error {
    /// Item count missing, non-numeric or not positive, or unusable bounds.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No unused name could be drawn for an item.
    #[error("could not draw a unique name for item {count} after {attempts} attempts")]
    GenerationExhausted {
        /// Number of items already named when generation gave up.
        count: usize,
        /// Attempts spent on the failing item (0 when the name space was
        /// known to be too small up front).
        attempts: usize,
    },

    /// Writing the instance failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors produced when reading the instance text format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input had no non-empty line.
    #[error("missing <cost-limit> line")]
    MissingLimit,

    /// First line was not a positive integer.
    #[error("line {line}: <cost-limit> was not a positive integer")]
    InvalidLimit {
        /// 1-based line number.
        line: usize,
    },

    /// An item line did not have the `name,cost,value` shape.
    #[error("line {line}: {reason}")]
    InvalidItem {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
}

/// Specialized `Result` type for generation.
pub type Result<T> = std::result::Result<T, Error>;
