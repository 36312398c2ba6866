//! HTTP client shared by all completion providers

use std::time::Duration;

use async_trait::async_trait;
use domain::ProviderKind;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::envelope::ApiStyle;
use crate::config::ProviderConfig;
use crate::error::InferenceError;
use crate::ports::{CompletionClient, CompletionResponse};

const ANTHROPIC_API_KEY_HEADER: &str = "x-api-key";
const ANTHROPIC_VERSION_HEADER: &str = "anthropic-version";
const DEFAULT_ANTHROPIC_VERSION: &str = "2023-06-01";

/// Completion client for one configured provider
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: Client,
    kind: ProviderKind,
    style: ApiStyle,
    config: ProviderConfig,
}

impl ProviderClient {
    /// Create a client for a provider
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::Configuration` if the configuration is
    /// invalid or the HTTP client cannot be built.
    pub fn new(kind: ProviderKind, config: ProviderConfig) -> Result<Self, InferenceError> {
        config.validate().map_err(InferenceError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::Configuration(e.to_string()))?;

        info!(
            provider = %kind,
            endpoint = %config.endpoint,
            model = %config.model,
            "Initialized completion client"
        );

        Ok(Self {
            client,
            kind,
            style: ApiStyle::for_provider(kind),
            config,
        })
    }

    /// Create a client with the built-in settings for a provider
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::Configuration` if the HTTP client cannot be built.
    pub fn with_defaults(kind: ProviderKind) -> Result<Self, InferenceError> {
        Self::new(kind, ProviderConfig::for_kind(kind))
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn authorize(&self, request: RequestBuilder, api_key: &str) -> RequestBuilder {
        match self.style {
            ApiStyle::ChatCompletions => request.bearer_auth(api_key),
            ApiStyle::Messages => request
                .header(ANTHROPIC_API_KEY_HEADER, api_key)
                .header(
                    ANTHROPIC_VERSION_HEADER,
                    self.config
                        .api_version
                        .as_deref()
                        .unwrap_or(DEFAULT_ANTHROPIC_VERSION),
                ),
        }
    }
}

#[async_trait]
impl CompletionClient for ProviderClient {
    #[instrument(skip(self, prompt, api_key), fields(provider = %self.kind, model = %self.config.model))]
    async fn complete(
        &self,
        prompt: &str,
        api_key: &str,
    ) -> Result<CompletionResponse, InferenceError> {
        let body = self
            .style
            .request_body(&self.config.model, prompt, self.config.max_tokens);

        debug!(prompt_chars = prompt.chars().count(), "Sending completion request");

        let request = self.client.post(&self.config.endpoint).json(&body);
        let response = self
            .authorize(request, api_key)
            .send()
            .await
            .map_err(|e| InferenceError::from_reqwest(&e, self.config.timeout_ms))?;

        // Only 200 carries an answer; any other status is reported by code
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Completion request failed");
            return Err(InferenceError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| InferenceError::from_reqwest(&e, self.config.timeout_ms))?;
        let json: Value = serde_json::from_str(&text)
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let content = self
            .style
            .extract_answer(&json)
            .ok_or_else(|| InferenceError::ExtractionError(self.style.answer_pointer().to_string()))?
            .to_string();
        let model = ApiStyle::reported_model(&json)
            .unwrap_or(&self.config.model)
            .to_string();

        debug!(answer_chars = content.chars().count(), "Completion received");

        Ok(CompletionResponse { content, model })
    }

    fn provider(&self) -> ProviderKind {
        self.kind
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
