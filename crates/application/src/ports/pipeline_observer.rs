//! Pipeline observer - Progress reporting for an orchestrator run

use std::fmt;

use domain::ProviderKind;
#[cfg(test)]
use mockall::automock;
use serde::Serialize;

/// Stage a provider (or the whole run) has reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// Run accepted, nothing dispatched yet
    Idle,
    /// Request sent to a provider
    Dispatching,
    /// Provider returned an answer
    AnswerReady,
    /// No credential for the provider
    ProviderSkipped,
    /// Provider returned a failure
    ProviderFailed,
    /// Translating, chunking and synthesizing an answer
    AudioPipeline,
    /// Provider section finished
    Rendered,
    /// Every provider has been handled
    AllDone,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Dispatching => "dispatching",
            Self::AnswerReady => "answer_ready",
            Self::ProviderSkipped => "provider_skipped",
            Self::ProviderFailed => "provider_failed",
            Self::AudioPipeline => "audio_pipeline",
            Self::Rendered => "rendered",
            Self::AllDone => "all_done",
        };
        f.write_str(name)
    }
}

/// One transition of the orchestrator state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineEvent {
    /// Stage entered
    pub stage: PipelineStage,
    /// Provider concerned, `None` for run-level stages
    pub provider: Option<ProviderKind>,
    /// Human-readable status line
    pub message: String,
}

impl PipelineEvent {
    /// Create an event
    #[must_use]
    pub fn new(
        stage: PipelineStage,
        provider: Option<ProviderKind>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            stage,
            provider,
            message: message.into(),
        }
    }
}

/// Receives every transition of a run, in order
#[cfg_attr(test, automock)]
pub trait PipelineObserver: Send + Sync {
    /// Called once per transition
    fn on_event(&self, event: &PipelineEvent);
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {
    fn on_event(&self, _event: &PipelineEvent) {}
}
