//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Covers deterministic input and state failures only. Storage failures are
/// modelled next to the code that touches the filesystem.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty item name, quantity overflow).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A value had the wrong shape (e.g. a number where text was expected).
    #[error("invalid type: {0}")]
    InvalidType(String),

    /// The referenced entry does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_type(msg: impl Into<String>) -> Self {
        Self::InvalidType(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Whether this error reflects a broken invariant rather than bad input.
    pub fn is_invariant(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }
}
