//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Question was empty or whitespace only
    #[error("Question cannot be empty")]
    EmptyQuestion,

    /// Locale name or code not recognized
    #[error("Unknown voice locale: {0}")]
    UnknownLocale(String),

    /// Provider name not recognized
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
