//! Report of one orchestrator run

use domain::{
    PlaybackSequence, ProviderKind, ProviderOutcome, ProviderResult, Question, TextChunk,
    VoiceLocale,
};

/// Audio produced for one answer
#[derive(Debug, Clone)]
pub struct SpokenAnswer {
    /// Text that was chunked and synthesized (translated or source)
    pub spoken_text: String,
    /// Chunks of `spoken_text`
    pub chunks: Vec<TextChunk>,
    /// Segments that synthesized successfully, in order
    pub playback: PlaybackSequence,
}

/// Result section for one provider that was asked
#[derive(Debug, Clone)]
pub struct ProviderSection {
    /// Provider and what it returned
    pub outcome: ProviderOutcome,
    /// Audio for the answer; `None` for failures
    pub audio: Option<SpokenAnswer>,
}

impl ProviderSection {
    /// Section for a failed provider
    #[must_use]
    pub const fn failed(provider: ProviderKind, result: ProviderResult) -> Self {
        Self {
            outcome: ProviderOutcome { provider, result },
            audio: None,
        }
    }

    /// Provider of this section
    #[must_use]
    pub const fn provider(&self) -> ProviderKind {
        self.outcome.provider
    }

    /// Heading shown above the section
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        self.outcome.provider.display_name()
    }

    /// Answer or prefixed failure text
    #[must_use]
    pub fn display_text(&self) -> String {
        self.outcome.result.display_text()
    }

    /// Whether the provider answered
    #[must_use]
    pub const fn is_answer(&self) -> bool {
        self.outcome.result.is_answer()
    }
}

/// Everything a run produced, in dispatch order
///
/// Skipped providers do not appear.
#[derive(Debug, Clone)]
pub struct ResponseReport {
    /// The question asked
    pub question: Question,
    /// Locale used for audio
    pub locale: VoiceLocale,
    /// One section per provider that was asked
    pub sections: Vec<ProviderSection>,
}

impl ResponseReport {
    /// Whether no provider was asked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of providers that answered
    #[must_use]
    pub fn answered(&self) -> usize {
        self.sections.iter().filter(|s| s.is_answer()).count()
    }

    /// Section of one provider
    #[must_use]
    pub fn section(&self, provider: ProviderKind) -> Option<&ProviderSection> {
        self.sections.iter().find(|s| s.provider() == provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_section_has_prefixed_text_and_no_audio() {
        let section = ProviderSection::failed(ProviderKind::Anthropic, ProviderResult::http_status(401));
        assert_eq!(section.heading(), "Anthropic Claude");
        assert_eq!(section.display_text(), "❌ Error: 401");
        assert!(!section.is_answer());
        assert!(section.audio.is_none());
    }

    #[test]
    fn report_counts_answers() {
        let report = ResponseReport {
            question: Question::new("What is 2+2?").unwrap(),
            locale: VoiceLocale::English,
            sections: vec![
                ProviderSection::failed(ProviderKind::OpenAi, ProviderResult::failure("timeout")),
                ProviderSection {
                    outcome: ProviderOutcome {
                        provider: ProviderKind::Groq,
                        result: ProviderResult::Answer("4".to_string()),
                    },
                    audio: None,
                },
            ],
        };

        assert!(!report.is_empty());
        assert_eq!(report.answered(), 1);
        assert!(report.section(ProviderKind::Groq).is_some());
        assert!(report.section(ProviderKind::Anthropic).is_none());
    }
}
