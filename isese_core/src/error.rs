//! Error types for the isese_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for isese_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A month name or day number that does not exist in the cycle
    #[error("Not found: {0}")]
    NotFound(String),

    /// Numeric month index outside the cycle
    #[error("Invalid month index {index} (must be 0..{count})")]
    InvalidIndex { index: i64, count: usize },

    /// Authored tables are malformed; fatal at startup
    #[error("Calendar build inconsistency: {0}")]
    BuildInconsistency(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Caller-facing class of an error, independent of transport
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// The requested record does not exist (404-class)
    NotFound,
    /// The request itself is malformed (400-class)
    BadRequest,
    /// Internal inconsistency or environment failure (500-class)
    Internal,
}

impl Error {
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::NotFound(_) => ErrorClass::NotFound,
            Error::InvalidIndex { .. } => ErrorClass::BadRequest,
            _ => ErrorClass::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        assert_eq!(
            Error::NotFound("month 'X'".into()).class(),
            ErrorClass::NotFound
        );
        assert_eq!(
            Error::InvalidIndex { index: 13, count: 13 }.class(),
            ErrorClass::BadRequest
        );
        assert_eq!(
            Error::BuildInconsistency("short pool".into()).class(),
            ErrorClass::Internal
        );
    }

    #[test]
    fn test_invalid_index_message() {
        let err = Error::InvalidIndex { index: -1, count: 13 };
        assert_eq!(err.to_string(), "Invalid month index -1 (must be 0..13)");
    }
}
