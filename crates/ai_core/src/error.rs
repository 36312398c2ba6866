//! Completion errors

use thiserror::Error;

/// Errors that can occur while asking a provider
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to the provider
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request could not be sent or the body could not be read
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Provider answered with a non-success status
    #[error("{status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body, kept for logs
        body: String,
    },

    /// Body was not valid JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON did not contain the answer at the expected path
    #[error("Unexpected response shape: missing {0}")]
    ExtractionError(String),

    /// Timeout waiting for the provider
    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl InferenceError {
    /// Map a transport error, using the configured timeout for timeouts
    pub fn from_reqwest(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }

    /// HTTP status code, if the provider answered at all
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_displays_only_code() {
        let err = InferenceError::HttpStatus {
            status: 401,
            body: "{\"error\":\"bad key\"}".to_string(),
        };
        assert_eq!(err.to_string(), "401");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn extraction_error_message() {
        let err = InferenceError::ExtractionError("/choices/0/message/content".to_string());
        assert_eq!(
            err.to_string(),
            "Unexpected response shape: missing /choices/0/message/content"
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn timeout_error_message() {
        assert_eq!(
            InferenceError::Timeout(30000).to_string(),
            "Request timed out after 30000ms"
        );
    }

    #[test]
    fn connection_failed_error_message() {
        let err = InferenceError::ConnectionFailed("refused".to_string());
        assert_eq!(err.to_string(), "Connection failed: refused");
    }
}
