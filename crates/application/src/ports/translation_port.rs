//! Translation port - Interface for machine translation

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for translating English text
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranslationPort: Send + Sync {
    /// Translate English `text` into `target_language` (ISO 639-1)
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, ApplicationError>;
}
