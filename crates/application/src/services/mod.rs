//! Application services - Use case implementations

mod answer_orchestrator;
mod speech_synthesizer;
mod translator;

pub use answer_orchestrator::{AnswerOrchestrator, PipelineConfig};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisRetryPolicy};
pub use translator::Translator;
