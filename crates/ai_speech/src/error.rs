//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during translation or synthesis
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Failed to connect to the service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service answered with a non-success status
    #[error("Service returned status {0}")]
    HttpStatus(u16),

    /// Body is not a playable clip
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    /// Body could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during processing
    #[error("Speech processing timeout after {0}ms")]
    Timeout(u64),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SpeechError {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failed_error_message() {
        let err = SpeechError::ConnectionFailed("refused".to_string());
        assert_eq!(err.to_string(), "Connection failed: refused");
    }

    #[test]
    fn http_status_error_message() {
        let err = SpeechError::HttpStatus(503);
        assert_eq!(err.to_string(), "Service returned status 503");
    }

    #[test]
    fn invalid_audio_error_message() {
        let err = SpeechError::InvalidAudio("empty body".to_string());
        assert_eq!(err.to_string(), "Invalid audio: empty body");
    }

    #[test]
    fn timeout_error_message() {
        let err = SpeechError::Timeout(10000);
        assert_eq!(err.to_string(), "Speech processing timeout after 10000ms");
    }

    #[test]
    fn configuration_error_message() {
        let err = SpeechError::Configuration("empty url".to_string());
        assert_eq!(err.to_string(), "Configuration error: empty url");
    }
}
