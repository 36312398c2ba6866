//! Wiring of adapters into the answer pipeline

use std::sync::Arc;

use application::{
    AnswerOrchestrator, ApplicationError, CompletionPort, SpeechSynthesizer, Translator,
};
use domain::ProviderKind;
use tracing::info;

use crate::adapters::{CompletionAdapter, SpeechAdapter, TranslationAdapter};
use crate::config::AppConfig;

/// Build the orchestrator with HTTP-backed adapters for every provider
///
/// # Errors
///
/// Returns an error if any provider or speech client cannot be created.
pub fn build_orchestrator(config: &AppConfig) -> Result<AnswerOrchestrator, ApplicationError> {
    let providers = ProviderKind::ALL
        .iter()
        .map(|&kind| {
            CompletionAdapter::from_config(kind, config.providers.get(kind).clone())
                .map(|adapter| Arc::new(adapter) as Arc<dyn CompletionPort>)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let translator = Translator::new(Arc::new(TranslationAdapter::from_config(&config.speech)?));
    let synthesizer = SpeechSynthesizer::with_policy(
        Arc::new(SpeechAdapter::from_config(config.speech.clone())?),
        config.pipeline.retry_policy(),
    );

    let orchestrator =
        AnswerOrchestrator::new(providers, translator, synthesizer, config.pipeline.pipeline());

    info!(
        providers = ?orchestrator.providers(),
        max_chunk_chars = config.pipeline.max_chunk_chars,
        "Answer pipeline ready"
    );

    Ok(orchestrator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_all_providers() {
        let orchestrator = build_orchestrator(&AppConfig::default()).unwrap();
        assert_eq!(orchestrator.providers(), ProviderKind::ALL.to_vec());
    }

    #[test]
    fn invalid_provider_config_is_rejected() {
        let mut config = AppConfig::default();
        config.providers.groq.endpoint = String::new();

        let err = build_orchestrator(&config).unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }
}
