//! Audio pipeline configuration.

use std::time::Duration;

use application::{PipelineConfig, SynthesisRetryPolicy};
use serde::{Deserialize, Serialize};

use super::default_true;

/// Tunables of translation, chunking and synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineAppConfig {
    /// Upper bound of a chunk, in characters
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,

    /// Translate answers before synthesis (false = accent only)
    #[serde(default = "default_true")]
    pub translate_before_speech: bool,

    /// Attempts per chunk
    #[serde(default = "default_synthesis_max_attempts")]
    pub synthesis_max_attempts: u32,

    /// Pause between attempts in milliseconds
    #[serde(default = "default_synthesis_backoff_ms")]
    pub synthesis_backoff_ms: u64,
}

const fn default_max_chunk_chars() -> usize {
    150
}

const fn default_synthesis_max_attempts() -> u32 {
    3
}

const fn default_synthesis_backoff_ms() -> u64 {
    500
}

impl Default for PipelineAppConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: default_max_chunk_chars(),
            translate_before_speech: true,
            synthesis_max_attempts: default_synthesis_max_attempts(),
            synthesis_backoff_ms: default_synthesis_backoff_ms(),
        }
    }
}

impl PipelineAppConfig {
    /// Orchestrator settings
    #[must_use]
    pub const fn pipeline(&self) -> PipelineConfig {
        PipelineConfig {
            max_chunk_chars: self.max_chunk_chars,
            translate_before_speech: self.translate_before_speech,
        }
    }

    /// Synthesis retry policy
    #[must_use]
    pub fn retry_policy(&self) -> SynthesisRetryPolicy {
        SynthesisRetryPolicy::new(
            self.synthesis_max_attempts,
            Duration::from_millis(self.synthesis_backoff_ms),
        )
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chunk_chars == 0 {
            return Err("pipeline.max_chunk_chars must be greater than 0".to_string());
        }
        if self.synthesis_max_attempts == 0 {
            return Err("pipeline.synthesis_max_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}
