//! Configuration for completion providers

use serde::{Deserialize, Serialize};

use domain::ProviderKind;

/// Configuration for one completion provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Full URL of the completion endpoint
    pub endpoint: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Cap on generated tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// API version header value (message-style providers only)
    #[serde(default)]
    pub api_version: Option<String>,
}

const fn default_max_tokens() -> u32 {
    500
}

const fn default_timeout_ms() -> u64 {
    30_000 // 30 seconds
}

impl ProviderConfig {
    /// OpenAI chat completions with gpt-3.5-turbo
    pub fn openai() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: default_max_tokens(),
            timeout_ms: default_timeout_ms(),
            api_version: None,
        }
    }

    /// Anthropic messages API with Claude 3 Haiku
    pub fn anthropic() -> Self {
        Self {
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            model: "claude-3-haiku-20240307".to_string(),
            max_tokens: default_max_tokens(),
            timeout_ms: default_timeout_ms(),
            api_version: Some("2023-06-01".to_string()),
        }
    }

    /// Groq OpenAI-compatible endpoint with Llama 3.1 8B
    pub fn groq() -> Self {
        Self {
            endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
            max_tokens: default_max_tokens(),
            timeout_ms: default_timeout_ms(),
            api_version: None,
        }
    }

    /// Default configuration for a provider
    pub fn for_kind(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::OpenAi => Self::openai(),
            ProviderKind::Anthropic => Self::anthropic(),
            ProviderKind::Groq => Self::groq(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("Endpoint must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("Model must not be empty".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Configuration of all three providers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// OpenAI settings
    #[serde(default = "ProviderConfig::openai")]
    pub openai: ProviderConfig,

    /// Anthropic settings
    #[serde(default = "ProviderConfig::anthropic")]
    pub anthropic: ProviderConfig,

    /// Groq settings
    #[serde(default = "ProviderConfig::groq")]
    pub groq: ProviderConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            openai: ProviderConfig::openai(),
            anthropic: ProviderConfig::anthropic(),
            groq: ProviderConfig::groq(),
        }
    }
}

impl ProvidersConfig {
    /// Settings of one provider
    #[must_use]
    pub const fn get(&self, kind: ProviderKind) -> &ProviderConfig {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Anthropic => &self.anthropic,
            ProviderKind::Groq => &self.groq,
        }
    }
}
