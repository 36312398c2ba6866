//! Provider kind - Identifies one of the supported completion providers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported large-language-model providers
///
/// The declaration order is the dispatch order of a response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI chat completions
    OpenAi,
    /// Anthropic messages API
    Anthropic,
    /// Groq (OpenAI-compatible chat completions)
    Groq,
}

impl ProviderKind {
    /// All providers in dispatch order
    pub const ALL: [Self; 3] = [Self::OpenAi, Self::Anthropic, Self::Groq];

    /// Short name used in status messages
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Anthropic => "Claude",
            Self::Groq => "Groq",
        }
    }

    /// Section heading for this provider's answer
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI GPT-3.5",
            Self::Anthropic => "Anthropic Claude",
            Self::Groq => "Groq Llama",
        }
    }

    /// Config key for this provider
    #[must_use]
    pub const fn config_key(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Groq => "groq",
        }
    }

    /// Environment variable holding this provider's API key
    #[must_use]
    pub const fn credential_env_var(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
            Self::Groq => "GROQ_API_KEY",
        }
    }

    /// Parse from config string (case-insensitive)
    #[must_use]
    pub fn from_config(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Some(Self::OpenAi),
            "anthropic" | "claude" => Some(Self::Anthropic),
            "groq" => Some(Self::Groq),
            _ => None,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
