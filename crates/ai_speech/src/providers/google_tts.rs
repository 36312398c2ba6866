//! Public speech-synthesis endpoint client
//!
//! One GET per chunk; the response body is a complete MP3 clip.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{AudioData, AudioFormat};

/// Speech-synthesis client for the `client=tw-ob` endpoint
#[derive(Debug, Clone)]
pub struct GoogleTtsProvider {
    client: Client,
    config: SpeechConfig,
}

impl GoogleTtsProvider {
    /// Create a new synthesis client
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.tts_timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Check that a body is a playable MP3 clip
    fn validate_clip(data: &[u8]) -> Result<(), SpeechError> {
        if data.is_empty() {
            return Err(SpeechError::InvalidAudio("empty body".to_string()));
        }
        if !AudioFormat::Mp3.matches_header(data) {
            return Err(SpeechError::InvalidAudio(
                "body is not an MP3 stream".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl TextToSpeech for GoogleTtsProvider {
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        regional_variant: &str,
    ) -> Result<AudioData, SpeechError> {
        let speed = self.config.speed.to_string();

        debug!("Sending synthesis request");

        let response = self
            .client
            .get(self.config.tts_url(regional_variant))
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", text),
                ("ttsspeed", speed.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SpeechError::from_reqwest(&e, self.config.tts_timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Synthesis request failed");
            return Err(SpeechError::HttpStatus(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::from_reqwest(&e, self.config.tts_timeout_ms))?;

        Self::validate_clip(&bytes)?;

        debug!(bytes = bytes.len(), "Synthesis completed");
        Ok(AudioData::new(bytes.to_vec(), AudioFormat::Mp3))
    }
}
