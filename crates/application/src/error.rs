//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Translation backend error
    #[error("Translation failed: {0}")]
    Translation(String),

    /// Speech synthesis backend error
    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Synthesis(_) | Self::Translation(_) | Self::ExternalService(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_convert() {
        let err: ApplicationError = DomainError::EmptyQuestion.into();
        assert_eq!(err.to_string(), "Question cannot be empty");
        assert!(!err.is_retryable());
    }

    #[test]
    fn backend_errors_are_retryable() {
        assert!(ApplicationError::Synthesis("503".to_string()).is_retryable());
        assert!(ApplicationError::Translation("timeout".to_string()).is_retryable());
        assert!(!ApplicationError::Configuration("bad".to_string()).is_retryable());
    }
}
