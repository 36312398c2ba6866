//! Provider result - Normalized outcome of one provider call

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::ProviderKind;

/// Prefix carried by every failure text shown to the user
pub const FAILURE_PREFIX: &str = "❌ Error: ";

/// Outcome of asking one provider one question
///
/// Produced exactly once per provider per question and never retried
/// across providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum ProviderResult {
    /// The provider answered
    Answer(String),
    /// The call failed; holds the reason without the failure prefix
    Failure(String),
}

impl ProviderResult {
    /// Create a failure from any displayable reason
    pub fn failure(reason: impl fmt::Display) -> Self {
        Self::Failure(reason.to_string())
    }

    /// Create a failure for a non-success HTTP status
    #[must_use]
    pub fn http_status(status: u16) -> Self {
        Self::Failure(status.to_string())
    }

    /// Whether this result carries an answer
    #[must_use]
    pub const fn is_answer(&self) -> bool {
        matches!(self, Self::Answer(_))
    }

    /// The answer text, if any
    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::Answer(text) => Some(text),
            Self::Failure(_) => None,
        }
    }

    /// Text as shown to the user; failures carry [`FAILURE_PREFIX`]
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Answer(text) => text.clone(),
            Self::Failure(reason) => format!("{FAILURE_PREFIX}{reason}"),
        }
    }

    /// Classify a user-facing text by its prefix
    #[must_use]
    pub fn from_display_text(text: &str) -> Self {
        text.strip_prefix(FAILURE_PREFIX).map_or_else(
            || Self::Answer(text.to_string()),
            |reason| Self::Failure(reason.to_string()),
        )
    }
}

impl fmt::Display for ProviderResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// A provider result tagged with the provider that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOutcome {
    /// Provider that was asked
    pub provider: ProviderKind,
    /// What it returned
    pub result: ProviderResult,
}
