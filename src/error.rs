//! Error types for the probe library.

use thiserror::Error;

use crate::handlers::database::types::DatabaseError;

/// Result type alias for probe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for probe operations
#[derive(Debug, Error)]
pub enum Error {
    /// Database probe failure
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Hostname could not be resolved
    #[error("Resolution error: {0}")]
    Resolution(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Database(_) => 2,
            Error::Resolution(_) => 3,
            Error::InvalidInput(_) | Error::Config(_) => 64,
            Error::Io(_) => 74,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::InvalidInput("empty host".to_string());
        assert!(err.to_string().contains("empty host"));
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_database_error_wraps() {
        let err: Error = DatabaseError::QueryFailed("boom".to_string()).into();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("boom"));
    }
}
