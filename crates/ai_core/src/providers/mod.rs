//! Completion providers
//!
//! OpenAI and Groq share the chat-completions wire format; Anthropic uses
//! the messages format. One client type covers all three.

mod client;
mod envelope;

pub use client::ProviderClient;
pub use envelope::ApiStyle;

use domain::ProviderKind;

use crate::config::ProvidersConfig;
use crate::error::InferenceError;

/// Build one client per provider, in dispatch order
///
/// # Errors
///
/// Returns the first configuration error encountered.
pub fn build_clients(config: &ProvidersConfig) -> Result<Vec<ProviderClient>, InferenceError> {
    ProviderKind::ALL
        .iter()
        .map(|kind| ProviderClient::new(*kind, config.get(*kind).clone()))
        .collect()
}
