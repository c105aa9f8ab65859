//! Domain error model.

use thiserror::Error;

/// Result type used by value-object constructors.
pub type DomainResult<T> = Result<T, DomainError>;

/// Failure to build a domain value from raw input.
///
/// Form-level validation does not use this type: field problems are reported
/// as data through `ValidationResult`. This error is for code that needs a
/// parsed value (a `Cpf`, a `UserId`) and cannot continue without one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty or not a string/integer).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
