//! Error types for exclusion_io crate.
//!
//! Provides structured error handling for trajectory persistence.

use thiserror::Error;

/// Main error type for exclusion_io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON encoding or parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Loaded data violates a lattice invariant
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

/// Result type alias for exclusion_io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    /// Creates a new validation error.
    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IoError::validation("test error");
        assert_eq!(err.to_string(), "Validation error: test error");
    }

    #[test]
    fn test_error_context() {
        let err = IoError::validation("frame 3 has 4 sites").with_context("loading run.json");
        assert!(err.to_string().contains("loading run.json"));
        assert!(err.to_string().contains("frame 3"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: IoError = io_err.into();
        assert!(matches!(err, IoError::FileSystem(_)));
    }
}
