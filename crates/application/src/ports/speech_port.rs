//! Speech port - Interface for text-to-speech

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for speech synthesis
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Synthesize one clip
    ///
    /// # Arguments
    /// * `text` - Text of one chunk
    /// * `language` - ISO 639-1 code of the voice
    /// * `regional_variant` - Accent region (e.g. "com", "co.in")
    ///
    /// # Returns
    /// Encoded MP3 bytes of a standalone clip
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        regional_variant: &str,
    ) -> Result<Vec<u8>, ApplicationError>;
}
