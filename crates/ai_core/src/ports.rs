//! Port definitions for completion providers
//!
//! Defines the trait that provider clients implement.

use async_trait::async_trait;
use domain::ProviderKind;
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// Answer returned by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Extracted answer text
    pub content: String,
    /// Model that generated the answer
    pub model: String,
}

/// Port for chat completion clients
///
/// One call sends one question and makes exactly one HTTP attempt.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Ask a single-turn question
    ///
    /// # Arguments
    ///
    /// * `prompt` - The user's question
    /// * `api_key` - Credential for this provider
    ///
    /// # Errors
    ///
    /// Returns `InferenceError` on transport failure, non-success status or
    /// a response without an answer at the expected path.
    async fn complete(
        &self,
        prompt: &str,
        api_key: &str,
    ) -> Result<CompletionResponse, InferenceError>;

    /// Which provider this client talks to
    fn provider(&self) -> ProviderKind;

    /// Model identifier sent with each request
    fn model(&self) -> &str;
}
