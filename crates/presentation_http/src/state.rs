//! Application state shared across handlers

use std::sync::Arc;

use application::{AnswerOrchestrator, CredentialSet};
use infrastructure::{AppConfig, TemplateEngine};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Answer pipeline
    pub orchestrator: Arc<AnswerOrchestrator>,
    /// Provider keys found in the environment at start-up
    pub env_credentials: Arc<CredentialSet>,
    /// Page templates
    pub templates: TemplateEngine,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("orchestrator", &self.orchestrator)
            .field("env_providers", &self.env_credentials.configured())
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Combine environment keys with keys supplied by the request
    ///
    /// Environment keys take precedence.
    pub fn credentials_with(&self, supplied: &CredentialSet) -> CredentialSet {
        self.env_credentials.as_ref().clone().or_else(supplied)
    }
}
