//! Speech synthesizer - One clip per chunk, with a bounded retry

use std::{fmt, sync::Arc, time::Duration};

use domain::{AudioSegment, TextChunk};
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::SpeechPort};

/// Retry policy for one chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisRetryPolicy {
    /// Total attempts per chunk, at least 1
    pub max_attempts: u32,
    /// Fixed pause between attempts
    pub backoff: Duration,
}

impl Default for SynthesisRetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(500),
        }
    }
}

impl SynthesisRetryPolicy {
    /// Create a policy; `max_attempts` below 1 is raised to 1
    #[must_use]
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// Policy without pauses, for tests
    #[must_use]
    pub const fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            backoff: Duration::ZERO,
        }
    }
}

/// Synthesizes chunks into audio segments
#[derive(Clone)]
pub struct SpeechSynthesizer {
    port: Arc<dyn SpeechPort>,
    policy: SynthesisRetryPolicy,
}

impl fmt::Debug for SpeechSynthesizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechSynthesizer")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl SpeechSynthesizer {
    /// Create a synthesizer with the default policy
    pub fn new(port: Arc<dyn SpeechPort>) -> Self {
        Self::with_policy(port, SynthesisRetryPolicy::default())
    }

    /// Create a synthesizer with a custom retry policy
    pub fn with_policy(port: Arc<dyn SpeechPort>, policy: SynthesisRetryPolicy) -> Self {
        Self { port, policy }
    }

    /// Retry policy in use
    #[must_use]
    pub const fn policy(&self) -> SynthesisRetryPolicy {
        self.policy
    }

    /// Synthesize one chunk
    ///
    /// Any error counts as a failed attempt. After the last attempt the
    /// final error is returned and the chunk is lost.
    #[instrument(skip(self, chunk), fields(chunk = chunk.index, chars = chunk.char_count()))]
    pub async fn synthesize(
        &self,
        chunk: &TextChunk,
        language: &str,
        regional_variant: &str,
    ) -> Result<AudioSegment, ApplicationError> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            match self
                .port
                .synthesize(&chunk.text, language, regional_variant)
                .await
            {
                Ok(data) => {
                    if attempt > 1 {
                        debug!(attempts = attempt, "Chunk synthesized after retries");
                    }
                    return Ok(AudioSegment::mp3(chunk.index, data));
                },
                Err(e) if attempt >= max_attempts => {
                    warn!(
                        attempts = attempt,
                        error = %e,
                        "Chunk synthesis failed after max attempts"
                    );
                    return Err(e);
                },
                Err(e) => {
                    warn!(
                        attempt = attempt,
                        max_attempts = max_attempts,
                        error = %e,
                        "Chunk synthesis failed, retrying"
                    );
                    if !self.policy.backoff.is_zero() {
                        tokio::time::sleep(self.policy.backoff).await;
                    }
                },
            }
        }
    }

    /// Synthesize chunks one after another, dropping the ones that fail
    pub async fn synthesize_all(
        &self,
        chunks: &[TextChunk],
        language: &str,
        regional_variant: &str,
    ) -> Vec<AudioSegment> {
        let mut segments = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            if let Ok(segment) = self.synthesize(chunk, language, regional_variant).await {
                segments.push(segment);
            }
        }
        segments
    }
}
