//! Error types for the DLMM engine.
//!
//! The engine is total over well-formed numeric input: zero denominators and
//! missing bin data resolve to documented defaults. Only input whose shape the
//! engine cannot interpret is reported as an error.

use thiserror::Error;

/// Errors returned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The input record is malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    /// Creates an [`DomainError::InvalidInput`] with the given message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result type used throughout the engine.
pub type Result<T> = std::result::Result<T, DomainError>;
