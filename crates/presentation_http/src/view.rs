//! View models for the page and the JSON API

use application::{CredentialSet, ProviderSection, ResponseReport, SpokenAnswer};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use domain::{AudioSegment, PlaybackState, ProviderKind, VoiceLocale};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Page heading and document title
pub const PAGE_TITLE: &str = "🧠 Gyan AI - Voice-Enabled Educational Assistant";

/// Banner shown when the form is submitted without a question
pub const EMPTY_QUESTION_WARNING: &str = "⚠️ Please enter a question!";

/// Name of the password field carrying a provider key
pub fn credential_field_name(provider: ProviderKind) -> String {
    format!("{}_api_key", provider.config_key())
}

/// Encode an audio segment for an `<audio src>` attribute
pub fn data_uri(segment: &AudioSegment) -> String {
    format!(
        "data:{};base64,{}",
        segment.mime_type(),
        STANDARD.encode(segment.data())
    )
}

// ----------------------------------------------------------------------------
// Page
// ----------------------------------------------------------------------------

/// Form posted by the page
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AskForm {
    pub question: String,
    pub locale: String,
    pub openai_api_key: String,
    pub anthropic_api_key: String,
    pub groq_api_key: String,
}

impl AskForm {
    /// Selected locale, English when missing or unknown
    pub fn locale(&self) -> VoiceLocale {
        self.locale.parse().unwrap_or_default()
    }

    /// Keys typed into the password fields; blank fields are ignored
    pub fn credentials(&self) -> CredentialSet {
        let mut set = CredentialSet::new();
        set.insert(ProviderKind::OpenAi, self.openai_api_key.as_str());
        set.insert(ProviderKind::Anthropic, self.anthropic_api_key.as_str());
        set.insert(ProviderKind::Groq, self.groq_api_key.as_str());
        set
    }
}

/// Entry of the locale selector
#[derive(Debug, Serialize)]
pub struct LocaleOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Password field for a provider without an environment key
#[derive(Debug, Serialize)]
pub struct CredentialField {
    pub name: String,
    pub label: String,
    pub env_var: &'static str,
}

/// Line of the system status panel
#[derive(Debug, Serialize)]
pub struct StatusItem {
    pub label: &'static str,
    pub configured: bool,
}

/// Player for one answer
#[derive(Debug, Serialize)]
pub struct AudioView {
    /// Data URIs in playback order
    pub sources: Vec<String>,
    /// "part 1 of n" while segments exist
    pub label: Option<String>,
    /// Shown instead of the player when every part failed
    pub notice: Option<String>,
}

impl From<&SpokenAnswer> for AudioView {
    fn from(spoken: &SpokenAnswer) -> Self {
        Self {
            sources: spoken.playback.segments().iter().map(data_uri).collect(),
            label: spoken.playback.position_label(),
            notice: spoken.playback.failure_notice(),
        }
    }
}

/// Rendered result of one provider
#[derive(Debug, Serialize)]
pub struct SectionView {
    pub heading: &'static str,
    pub text: String,
    pub is_error: bool,
    pub audio: Option<AudioView>,
}

impl From<&ProviderSection> for SectionView {
    fn from(section: &ProviderSection) -> Self {
        Self {
            heading: section.heading(),
            text: section.display_text(),
            is_error: !section.is_answer(),
            audio: section.audio.as_ref().map(AudioView::from),
        }
    }
}

/// Everything the page template needs
#[derive(Debug, Serialize)]
pub struct PageView {
    pub title: &'static str,
    pub question: String,
    pub warning: Option<&'static str>,
    pub locales: Vec<LocaleOption>,
    pub credential_fields: Vec<CredentialField>,
    pub status: Vec<StatusItem>,
    pub speech_label: &'static str,
    pub sections: Vec<SectionView>,
}

impl PageView {
    /// Initial page: prompt only
    ///
    /// Password fields are offered for providers without an environment key;
    /// the status panel reflects `active`, the keys in effect for this request.
    pub fn new(locale: VoiceLocale, env: &CredentialSet, active: &CredentialSet) -> Self {
        let locales = VoiceLocale::ALL
            .iter()
            .map(|&l| LocaleOption {
                value: l.language_code(),
                label: l.display_name(),
                selected: l == locale,
            })
            .collect();

        let credential_fields = ProviderKind::ALL
            .iter()
            .filter(|&&p| !env.has(p))
            .map(|&p| CredentialField {
                name: credential_field_name(p),
                label: format!("{} API Key", p.short_name()),
                env_var: p.credential_env_var(),
            })
            .collect();

        let status = ProviderKind::ALL
            .iter()
            .map(|&p| StatusItem {
                label: p.short_name(),
                configured: active.has(p),
            })
            .collect();

        Self {
            title: PAGE_TITLE,
            question: String::new(),
            warning: None,
            locales,
            credential_fields,
            status,
            speech_label: "TTS",
            sections: Vec::new(),
        }
    }

    /// Keep the submitted question in the text box
    #[must_use]
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    /// Show the empty-question banner
    #[must_use]
    pub const fn with_empty_question_warning(mut self) -> Self {
        self.warning = Some(EMPTY_QUESTION_WARNING);
        self
    }

    /// Add one section per provider that was asked
    #[must_use]
    pub fn with_report(mut self, report: &ResponseReport) -> Self {
        self.sections = report.sections.iter().map(SectionView::from).collect();
        self
    }
}

// ----------------------------------------------------------------------------
// JSON API
// ----------------------------------------------------------------------------

/// Body of `POST /v1/ask` and `POST /v1/ask/stream`
#[derive(Debug, Deserialize, Validate)]
pub struct AskRequest {
    #[validate(length(min = 1, max = 4000, message = "must be between 1 and 4000 characters"))]
    pub question: String,
    #[serde(default)]
    pub locale: VoiceLocale,
    /// Keys for providers without an environment key, by provider name
    #[serde(default)]
    pub api_keys: std::collections::BTreeMap<ProviderKind, String>,
}

impl AskRequest {
    /// Keys supplied with the request
    pub fn credentials(&self) -> CredentialSet {
        let mut set = CredentialSet::new();
        for (&provider, key) in &self.api_keys {
            set.insert(provider, key.as_str());
        }
        set
    }
}

/// One synthesized part of an answer
#[derive(Debug, Serialize)]
pub struct SegmentResponse {
    /// Zero-based index of the chunk this part voices
    pub chunk_index: usize,
    pub mime_type: &'static str,
    /// Base64 encoded audio
    pub data: String,
}

/// Audio of one answer
#[derive(Debug, Serialize)]
pub struct AudioResponse {
    pub spoken_text: String,
    pub chunk_count: usize,
    pub skipped: usize,
    pub state: PlaybackState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub segments: Vec<SegmentResponse>,
}

impl From<&SpokenAnswer> for AudioResponse {
    fn from(spoken: &SpokenAnswer) -> Self {
        let playback = &spoken.playback;
        Self {
            spoken_text: spoken.spoken_text.clone(),
            chunk_count: spoken.chunks.len(),
            skipped: playback.skipped(),
            state: playback.state(),
            notice: playback.failure_notice(),
            segments: playback
                .segments()
                .iter()
                .map(|s| SegmentResponse {
                    chunk_index: s.chunk_index(),
                    mime_type: s.mime_type(),
                    data: STANDARD.encode(s.data()),
                })
                .collect(),
        }
    }
}

/// Result of one provider
#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub provider: ProviderKind,
    pub heading: &'static str,
    pub answered: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioResponse>,
}

impl From<&ProviderSection> for SectionResponse {
    fn from(section: &ProviderSection) -> Self {
        Self {
            provider: section.provider(),
            heading: section.heading(),
            answered: section.is_answer(),
            text: section.display_text(),
            audio: section.audio.as_ref().map(AudioResponse::from),
        }
    }
}

/// Body of a successful `POST /v1/ask`
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub question: String,
    pub locale: VoiceLocale,
    pub sections: Vec<SectionResponse>,
}

impl From<&ResponseReport> for AskResponse {
    fn from(report: &ResponseReport) -> Self {
        Self {
            question: report.question.as_str().to_string(),
            locale: report.locale,
            sections: report.sections.iter().map(SectionResponse::from).collect(),
        }
    }
}
