//! Voice locale - Output language plus regional pronunciation variant

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Language and accent used for synthesized speech
///
/// The regional variant selects the pronunciation host of the speech backend
/// (`com` for the default accent, `co.in` for Indian pronunciation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceLocale {
    /// English with the default accent
    #[default]
    English,
    /// Hindi, Indian pronunciation
    Hindi,
    /// Kannada, Indian pronunciation
    Kannada,
}

impl VoiceLocale {
    /// All selectable locales in display order
    pub const ALL: [Self; 3] = [Self::English, Self::Hindi, Self::Kannada];

    /// Human-readable language name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Kannada => "Kannada",
        }
    }

    /// ISO 639-1 language code
    #[must_use]
    pub const fn language_code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Kannada => "kn",
        }
    }

    /// Regional variant of the speech backend
    #[must_use]
    pub const fn regional_variant(&self) -> &'static str {
        match self {
            Self::English => "com",
            Self::Hindi | Self::Kannada => "co.in",
        }
    }

    /// Whether this is the source language of provider answers
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::English)
    }
}

impl fmt::Display for VoiceLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for VoiceLocale {
    type Err = DomainError;

    /// Accepts the display name or the language code, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "hindi" | "hi" => Ok(Self::Hindi),
            "kannada" | "kn" => Ok(Self::Kannada),
            _ => Err(DomainError::UnknownLocale(s.to_string())),
        }
    }
}
