//! Completion adapter - Implements CompletionPort using ai_core clients

use std::{fmt, sync::Arc};

use ai_core::{CompletionClient, InferenceError, ProviderClient, ProviderConfig};
use application::{error::ApplicationError, ports::CompletionPort};
use async_trait::async_trait;
use domain::{ProviderKind, ProviderResult, Question};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

/// Adapter folding completion client errors into provider failures
pub struct CompletionAdapter {
    client: Arc<dyn CompletionClient>,
}

impl fmt::Debug for CompletionAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionAdapter")
            .field("provider", &self.client.provider())
            .field("model", &self.client.model())
            .finish()
    }
}

impl CompletionAdapter {
    /// Wrap an existing client
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Create an adapter with an HTTP client for `kind`
    ///
    /// # Errors
    ///
    /// Returns an error if the client configuration is invalid.
    pub fn from_config(kind: ProviderKind, config: ProviderConfig) -> Result<Self, ApplicationError> {
        let client = ProviderClient::new(kind, config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Convert a client error into the failure shown to the user
    ///
    /// Non-success statuses show only the status code.
    fn to_failure(error: &InferenceError) -> ProviderResult {
        error
            .status()
            .map_or_else(|| ProviderResult::failure(error), ProviderResult::http_status)
    }
}

#[async_trait]
impl CompletionPort for CompletionAdapter {
    #[instrument(skip(self, question, api_key), fields(provider = %self.client.provider()))]
    async fn complete(&self, question: &Question, api_key: &SecretString) -> ProviderResult {
        match self
            .client
            .complete(question.as_str(), api_key.expose_secret())
            .await
        {
            Ok(response) => {
                debug!(model = %response.model, "Provider answered");
                ProviderResult::Answer(response.content)
            },
            Err(e) => {
                warn!(error = %e, "Provider call failed");
                Self::to_failure(&e)
            },
        }
    }

    fn provider(&self) -> ProviderKind {
        self.client.provider()
    }
}
