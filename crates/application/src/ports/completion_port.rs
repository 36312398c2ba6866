//! Completion port - Interface for answer providers

use async_trait::async_trait;
use domain::{ProviderKind, ProviderResult, Question};
#[cfg(test)]
use mockall::automock;
use secrecy::SecretString;

/// Port for one answer provider
///
/// Implementations fold every error into `ProviderResult::Failure`; the
/// orchestrator never sees a transport error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Ask the provider one question with its credential
    async fn complete(&self, question: &Question, api_key: &SecretString) -> ProviderResult;

    /// Which provider this port talks to
    fn provider(&self) -> ProviderKind;
}
