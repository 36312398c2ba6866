//! Port definitions - Interfaces for external adapters

mod completion_port;
mod pipeline_observer;
mod speech_port;
mod translation_port;

#[cfg(test)]
pub use completion_port::MockCompletionPort;
pub use completion_port::CompletionPort;
#[cfg(test)]
pub use pipeline_observer::MockPipelineObserver;
pub use pipeline_observer::{NoopObserver, PipelineEvent, PipelineObserver, PipelineStage};
#[cfg(test)]
pub use speech_port::MockSpeechPort;
pub use speech_port::SpeechPort;
#[cfg(test)]
pub use translation_port::MockTranslationPort;
pub use translation_port::TranslationPort;
