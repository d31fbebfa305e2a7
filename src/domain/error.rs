//! Domain Errors
//!
//! The two error classes pantry operations can surface: rejected user input
//! and storage backend failures. A lookup miss on adjust or remove is not an
//! error at all; callers treat it as a logged no-op.

use thiserror::Error;

/// Common result type for pantry operations
pub type PantryResult<T> = Result<T, PantryError>;

/// Errors surfaced by pantry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PantryError {
    /// Rejected user input, e.g. an empty item name
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A storage call failed: transport, status, or decode
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl PantryError {
    /// Build a backend error from any displayable cause
    pub fn backend(cause: impl std::fmt::Display) -> Self {
        PantryError::Backend(cause.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PantryError::InvalidInput("item name cannot be empty".to_string());
        assert_eq!(err.to_string(), "invalid input: item name cannot be empty");

        let err = PantryError::backend("connection refused");
        assert_eq!(err.to_string(), "storage backend error: connection refused");
    }
}
