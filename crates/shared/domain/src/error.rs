//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was missing or unusable when building an entity.
    /// Carries the qualified field name, e.g. `User.username`.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl DomainError {
    /// Create an invalid parameter error for the given field
    pub fn invalid_parameter(field: impl Into<String>) -> Self {
        DomainError::InvalidParameter(field.into())
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            DomainError::InvalidParameter(field) => field,
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
