//! Port definitions for translation and speech synthesis
//!
//! Defines the traits (ports) that speech adapters must implement.

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::AudioData;

/// Port for machine translation
#[async_trait]
pub trait Translation: Send + Sync {
    /// Translate English text into the target language
    ///
    /// # Arguments
    ///
    /// * `text` - English source text
    /// * `target_language` - ISO 639-1 code (e.g. "hi", "kn")
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if the request fails or the body has no
    /// translated segment.
    async fn translate(&self, text: &str, target_language: &str)
    -> Result<String, SpeechError>;
}

/// Port for Text-to-Speech (TTS) implementations
///
/// Implementations of this trait convert one chunk of text to one clip.
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech
    ///
    /// # Arguments
    ///
    /// * `text` - Text to synthesize
    /// * `language` - ISO 639-1 code of the voice
    /// * `regional_variant` - Regional accent (e.g. "com", "co.in")
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails or the clip is not playable.
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        regional_variant: &str,
    ) -> Result<AudioData, SpeechError>;
}
