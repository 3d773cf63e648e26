//! Error types for solver operations.
//!
//! All fallible operations in this crate return [`AcsResult`]. Errors are
//! fail-fast: an [`AcsError::InvalidIndex`] or
//! [`AcsError::DegenerateDistance`] indicates an upstream contract violation,
//! not a transient condition, so no operation retries or degrades to a
//! partial result.

use thiserror::Error;

/// Result type for solver operations.
pub type AcsResult<T> = Result<T, AcsError>;

/// Errors that can occur while building or running the solver.
#[derive(Debug, Error)]
pub enum AcsError {
    /// A hyperparameter or constructor argument is malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A tour references a node outside the valid range.
    #[error("node index {index} out of range (expected 0..{size})")]
    InvalidIndex { index: usize, size: usize },

    /// A distance provider returned zero for two distinct nodes instead of
    /// substituting the required positive floor.
    #[error("zero distance between distinct nodes {from} and {to}")]
    DegenerateDistance { from: usize, to: usize },

    /// A TSPLIB file could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// An I/O error while reading an instance or tour file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_display() {
        let err = AcsError::InvalidIndex { index: 7, size: 5 };
        assert_eq!(err.to_string(), "node index 7 out of range (expected 0..5)");
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AcsError::from(io);
        assert!(matches!(err, AcsError::Io(_)));
    }
}
