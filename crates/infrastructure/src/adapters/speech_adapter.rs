//! Speech adapters - Implement TranslationPort and SpeechPort using ai_speech

use std::{fmt, sync::Arc};

use ai_speech::{
    GoogleTranslateClient, GoogleTtsProvider, SpeechConfig, SpeechError, TextToSpeech, Translation,
};
use application::error::ApplicationError;
use application::ports::{SpeechPort, TranslationPort};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for translation using ai_speech crate
pub struct TranslationAdapter {
    translator: Arc<dyn Translation>,
}

impl fmt::Debug for TranslationAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationAdapter").finish_non_exhaustive()
    }
}

impl TranslationAdapter {
    /// Wrap an existing translator
    pub fn new(translator: Arc<dyn Translation>) -> Self {
        Self { translator }
    }

    /// Create an adapter backed by the public translation endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &SpeechConfig) -> Result<Self, ApplicationError> {
        let client = GoogleTranslateClient::new(config)
            .map_err(|e: SpeechError| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }
}

#[async_trait]
impl TranslationPort for TranslationAdapter {
    #[instrument(skip(self, text))]
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, ApplicationError> {
        self.translator
            .translate(text, target_language)
            .await
            .map_err(|e| ApplicationError::Translation(e.to_string()))
    }
}

/// Adapter for speech synthesis using ai_speech crate
pub struct SpeechAdapter {
    provider: Arc<dyn TextToSpeech>,
}

impl fmt::Debug for SpeechAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechAdapter").finish_non_exhaustive()
    }
}

impl SpeechAdapter {
    /// Wrap an existing synthesizer
    pub fn new(provider: Arc<dyn TextToSpeech>) -> Self {
        Self { provider }
    }

    /// Create an adapter backed by the public synthesis endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to initialize.
    pub fn from_config(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = GoogleTtsProvider::new(config)
            .map_err(|e: SpeechError| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(provider)))
    }
}

#[async_trait]
impl SpeechPort for SpeechAdapter {
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        regional_variant: &str,
    ) -> Result<Vec<u8>, ApplicationError> {
        let audio = self
            .provider
            .synthesize(text, language, regional_variant)
            .await
            .map_err(|e| ApplicationError::Synthesis(e.to_string()))?;

        debug!(bytes = audio.size_bytes(), "Clip synthesized");
        Ok(audio.into_data())
    }
}
