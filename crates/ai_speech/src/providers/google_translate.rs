//! Public translation endpoint client
//!
//! The endpoint answers with a nested array whose first element lists the
//! translated sentences: `[[["चार","four",null,null,1]], null, "en", ...]`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::Translation;

const SOURCE_LANGUAGE: &str = "en";

/// Translation client for the `client=gtx` endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    client: Client,
    url: String,
    timeout_ms: u64,
}

impl GoogleTranslateClient {
    /// Create a new translation client
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: &SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.translate_timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            url: config.translate_url.clone(),
            timeout_ms: config.translate_timeout_ms,
        })
    }
}

/// Concatenate the translated sentence segments of a response
///
/// Returns `None` when the first segment is missing.
#[must_use]
pub fn parse_translation(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    // The first segment must exist; later ones are optional
    segments.first()?.get(0)?.as_str()?;

    Some(
        segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect(),
    )
}

#[async_trait]
impl Translation for GoogleTranslateClient {
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, SpeechError> {
        debug!("Sending translation request");

        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("client", "gtx"),
                ("sl", SOURCE_LANGUAGE),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| SpeechError::from_reqwest(&e, self.timeout_ms))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = %status, "Translation request failed");
            return Err(SpeechError::HttpStatus(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;

        let translated = parse_translation(&body).ok_or_else(|| {
            SpeechError::InvalidResponse("missing translated segment".to_string())
        })?;

        debug!(chars = translated.chars().count(), "Translation received");
        Ok(translated)
    }
}
