//! Custom error types for Tally
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for caller-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A registration attempt collided with an existing username
    #[error("Username already taken: {username}")]
    DuplicateUsername { username: String },

    /// Sign-in failed; deliberately does not say whether the username exists
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Unexpected storage-engine errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TallyError {
    /// Create a "not found" error for users
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a duplicate-username error
    pub fn is_duplicate_username(&self) -> bool {
        matches!(self, Self::DuplicateUsername { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<sqlx::Error> for TallyError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for Tally operations
pub type TallyResult<T> = Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TallyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = TallyError::user_not_found("mallory");
        assert_eq!(err.to_string(), "User not found: mallory");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_username_error() {
        let err = TallyError::DuplicateUsername {
            username: "alice".into(),
        };
        assert_eq!(err.to_string(), "Username already taken: alice");
        assert!(err.is_duplicate_username());
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        // Must not leak whether the username exists.
        assert_eq!(
            TallyError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tally_err: TallyError = io_err.into();
        assert!(matches!(tally_err, TallyError::Io(_)));
    }
}
