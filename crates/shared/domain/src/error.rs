//! Domain-level errors.
//!
//! These errors represent business rule violations.
//! They are independent of infrastructure concerns (database, CLI).

use thiserror::Error;
use validator::ValidationErrors;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

/// Keeps the first field message, sorted by field name so the result is stable.
impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let message = fields
            .into_iter()
            .flat_map(|(field, errors)| errors.iter().map(move |error| (field, error)))
            .next()
            .map(|(field, error)| match &error.message {
                Some(msg) => msg.to_string(),
                None => format!("{} is invalid", field),
            })
            .unwrap_or_else(|| "Validation failed".to_string());

        DomainError::Validation(message)
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
