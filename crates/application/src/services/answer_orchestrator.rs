//! Answer orchestrator - Runs one question through every provider
//!
//! This service drives the complete response cycle:
//! 1. Ask each provider with a credential, in fixed order
//! 2. Translate each answer into the selected language
//! 3. Chunk the spoken text
//! 4. Synthesize one clip per chunk, with retry
//! 5. Sequence the surviving clips for playback
//!
//! Providers run strictly one after another and never affect each other.

use std::{any::Any, fmt, panic::AssertUnwindSafe, sync::Arc};

use domain::{
    PlaybackSequence, ProviderKind, ProviderOutcome, ProviderResult, Question, VoiceLocale,
    chunk_text,
};
use futures::FutureExt;
use secrecy::SecretString;
use tracing::{debug, info, instrument, warn};

use crate::{
    credentials::CredentialSet,
    ports::{CompletionPort, NoopObserver, PipelineEvent, PipelineObserver, PipelineStage},
    report::{ProviderSection, ResponseReport, SpokenAnswer},
    services::{SpeechSynthesizer, Translator},
};

/// Language used when answers are voiced without translation
const SOURCE_LANGUAGE: &str = "en";

/// Tunables of the audio pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Upper bound of a chunk, in characters
    pub max_chunk_chars: usize,
    /// Translate answers before synthesis; otherwise voice the English
    /// answer with the locale's accent only
    pub translate_before_speech: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: 150,
            translate_before_speech: true,
        }
    }
}

/// Orchestrates providers and the audio pipeline for one question
pub struct AnswerOrchestrator {
    providers: Vec<Arc<dyn CompletionPort>>,
    translator: Translator,
    synthesizer: SpeechSynthesizer,
    config: PipelineConfig,
}

impl fmt::Debug for AnswerOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let providers: Vec<_> = self.providers.iter().map(|p| p.provider()).collect();
        f.debug_struct("AnswerOrchestrator")
            .field("providers", &providers)
            .field("synthesizer", &self.synthesizer)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AnswerOrchestrator {
    /// Create an orchestrator
    ///
    /// Providers are put into dispatch order (OpenAI, Anthropic, Groq)
    /// regardless of the order given.
    pub fn new(
        mut providers: Vec<Arc<dyn CompletionPort>>,
        translator: Translator,
        synthesizer: SpeechSynthesizer,
        config: PipelineConfig,
    ) -> Self {
        providers.sort_by_key(|p| p.provider());
        Self {
            providers,
            translator,
            synthesizer,
            config,
        }
    }

    /// Pipeline configuration in use
    #[must_use]
    pub const fn config(&self) -> PipelineConfig {
        self.config
    }

    /// Providers known to this orchestrator, in dispatch order
    #[must_use]
    pub fn providers(&self) -> Vec<ProviderKind> {
        self.providers.iter().map(|p| p.provider()).collect()
    }

    /// Run one question without progress reporting
    pub async fn answer(
        &self,
        question: &Question,
        locale: VoiceLocale,
        credentials: &CredentialSet,
    ) -> ResponseReport {
        self.run(question, locale, credentials, &NoopObserver).await
    }

    /// Run one question, reporting every transition to `observer`
    #[instrument(skip_all, fields(locale = %locale.display_name(), question_chars = question.char_count()))]
    pub async fn run(
        &self,
        question: &Question,
        locale: VoiceLocale,
        credentials: &CredentialSet,
        observer: &dyn PipelineObserver,
    ) -> ResponseReport {
        observer.on_event(&PipelineEvent::new(
            PipelineStage::Idle,
            None,
            "Question received",
        ));

        let mut sections = Vec::new();

        for port in &self.providers {
            let provider = port.provider();

            let Some(api_key) = credentials.get(provider) else {
                debug!(provider = %provider, "No credential, skipping provider");
                observer.on_event(&PipelineEvent::new(
                    PipelineStage::ProviderSkipped,
                    Some(provider),
                    format!("{provider} skipped: no API key"),
                ));
                continue;
            };

            let step = AssertUnwindSafe(self.run_provider(
                port.as_ref(),
                question,
                api_key,
                locale,
                observer,
            ))
            .catch_unwind()
            .await;

            let section = step.unwrap_or_else(|payload| {
                let reason = panic_message(payload.as_ref());
                warn!(provider = %provider, reason = %reason, "Provider step panicked");
                let result = ProviderResult::failure(format!("unexpected error: {reason}"));
                observer.on_event(&PipelineEvent::new(
                    PipelineStage::ProviderFailed,
                    Some(provider),
                    result.display_text(),
                ));
                ProviderSection::failed(provider, result)
            });

            sections.push(section);
        }

        info!(
            asked = sections.len(),
            answered = sections.iter().filter(|s| s.is_answer()).count(),
            "Response cycle complete"
        );
        observer.on_event(&PipelineEvent::new(PipelineStage::AllDone, None, "Done"));

        ResponseReport {
            question: question.clone(),
            locale,
            sections,
        }
    }

    /// Ask one provider and, on an answer, run the audio pipeline
    async fn run_provider(
        &self,
        port: &dyn CompletionPort,
        question: &Question,
        api_key: &SecretString,
        locale: VoiceLocale,
        observer: &dyn PipelineObserver,
    ) -> ProviderSection {
        let provider = port.provider();

        observer.on_event(&PipelineEvent::new(
            PipelineStage::Dispatching,
            Some(provider),
            format!("Getting {provider} response..."),
        ));

        let result = port.complete(question, api_key).await;

        let answer = match &result {
            ProviderResult::Answer(text) => text.clone(),
            ProviderResult::Failure(reason) => {
                warn!(provider = %provider, reason = %reason, "Provider failed");
                observer.on_event(&PipelineEvent::new(
                    PipelineStage::ProviderFailed,
                    Some(provider),
                    result.display_text(),
                ));
                return ProviderSection::failed(provider, result);
            },
        };

        observer.on_event(&PipelineEvent::new(
            PipelineStage::AnswerReady,
            Some(provider),
            format!("{provider} answered"),
        ));
        observer.on_event(&PipelineEvent::new(
            PipelineStage::AudioPipeline,
            Some(provider),
            format!(
                "Generating {} audio for {provider}...",
                locale.display_name()
            ),
        ));

        let audio = self.speak(&answer, locale).await;

        let status = audio.playback.failure_notice().unwrap_or_else(|| {
            format!("{} audio ready!", locale.display_name())
        });
        observer.on_event(&PipelineEvent::new(
            PipelineStage::Rendered,
            Some(provider),
            status,
        ));

        ProviderSection {
            outcome: ProviderOutcome { provider, result },
            audio: Some(audio),
        }
    }

    /// Translate, chunk, synthesize and sequence one answer
    async fn speak(&self, answer: &str, locale: VoiceLocale) -> SpokenAnswer {
        let (spoken_text, language) = if self.config.translate_before_speech {
            (
                self.translator.translate(answer, locale).await,
                locale.language_code(),
            )
        } else {
            (answer.to_string(), SOURCE_LANGUAGE)
        };

        let chunks = chunk_text(&spoken_text, self.config.max_chunk_chars);
        let segments = self
            .synthesizer
            .synthesize_all(&chunks, language, locale.regional_variant())
            .await;

        debug!(
            chunks = chunks.len(),
            segments = segments.len(),
            "Audio pipeline finished"
        );

        let playback = PlaybackSequence::new(segments, chunks.len());
        SpokenAnswer {
            spoken_text,
            chunks,
            playback,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic".to_string())
}
