//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings and log format
//! - `pipeline`: chunking, translation and synthesis retry
//!
//! Provider and speech settings live next to their clients in `ai_core` and
//! `ai_speech`. Provider credentials are never part of this configuration;
//! see [`crate::adapters::EnvCredentialSource`].

mod pipeline;
mod server;

use std::path::Path;

use ai_core::{ProviderConfig, ProvidersConfig};
use ai_speech::SpeechConfig;
use config::{ConfigBuilder, ConfigError, builder::DefaultState};
use domain::ProviderKind;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use pipeline::PipelineAppConfig;
pub use server::{LogFormat, ServerConfig};

/// Prefix of environment overrides, e.g. `GYAN_SERVER__PORT`
pub const ENV_PREFIX: &str = "GYAN";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Completion provider endpoints and models
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Translation and synthesis endpoints
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Audio pipeline tunables
    #[serde(default)]
    pub pipeline: PipelineAppConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    ///
    /// Precedence: built-in defaults, then `config.toml` in the working
    /// directory if present, then `GYAN_*` environment variables with `__`
    /// between nested keys (e.g. `GYAN_PIPELINE__MAX_CHUNK_CHARS=120`).
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false));
        Self::finish(builder)
    }

    /// Load configuration from a specific file plus environment overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?.add_source(config::File::from(path.as_ref()));
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        // Provider tables need complete defaults so a partial override
        // (e.g. only `max_tokens`) still deserializes
        for kind in ProviderKind::ALL {
            let defaults = ProviderConfig::for_kind(kind);
            let key = kind.config_key();
            builder = builder
                .set_default(format!("providers.{key}.endpoint"), defaults.endpoint)?
                .set_default(format!("providers.{key}.model"), defaults.model)?;
            if let Some(version) = defaults.api_version {
                builder = builder.set_default(format!("providers.{key}.api_version"), version)?;
            }
        }

        Ok(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = builder
            // Override with environment variables (e.g., GYAN_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate().map_err(ConfigError::Message)?;
        debug!(
            host = %config.server.host,
            port = config.server.port,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        for kind in ProviderKind::ALL {
            self.providers
                .get(kind)
                .validate()
                .map_err(|e| format!("providers.{}: {e}", kind.config_key()))?;
        }
        self.speech.validate().map_err(|e| format!("speech: {e}"))?;
        self.pipeline.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, LogFormat::Text);
        assert_eq!(config.pipeline.max_chunk_chars, 150);
        assert!(config.pipeline.translate_before_speech);
        assert_eq!(config.providers.openai.model, "gpt-3.5-turbo");
    }

    #[test]
    fn load_from_file_with_partial_provider_override() {
        let file = write_config(
            r#"
            [server]
            port = 8080
            log_format = "json"

            [providers.groq]
            max_tokens = 256

            [pipeline]
            max_chunk_chars = 120
            translate_before_speech = false
            synthesis_backoff_ms = 0
            "#,
        );

        let config = AppConfig::load_from(file.path()).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.providers.groq.max_tokens, 256);
        assert_eq!(config.providers.groq.model, "llama-3.1-8b-instant");
        assert_eq!(
            config.providers.anthropic.api_version.as_deref(),
            Some("2023-06-01")
        );
        assert_eq!(config.pipeline.max_chunk_chars, 120);
        assert!(!config.pipeline.translate_before_speech);
        assert_eq!(config.pipeline.synthesis_max_attempts, 3);
    }

    #[test]
    fn invalid_pipeline_is_rejected() {
        let file = write_config(
            r"
            [pipeline]
            max_chunk_chars = 0
            ",
        );

        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("max_chunk_chars"));
    }

    #[test]
    fn invalid_speech_speed_is_rejected() {
        let mut config = AppConfig::default();
        config.speech.speed = 9.0;
        assert!(config.validate().unwrap_err().starts_with("speech:"));
    }

    #[test]
    fn empty_provider_model_is_rejected() {
        let mut config = AppConfig::default();
        config.providers.anthropic.model = String::new();
        assert!(config.validate().unwrap_err().starts_with("providers.anthropic"));
    }

    #[test]
    fn pipeline_conversions() {
        let pipeline = PipelineAppConfig {
            max_chunk_chars: 80,
            translate_before_speech: false,
            synthesis_max_attempts: 2,
            synthesis_backoff_ms: 0,
        };
        let config = pipeline.pipeline();
        assert_eq!(config.max_chunk_chars, 80);
        assert!(!config.translate_before_speech);

        let policy = pipeline.retry_policy();
        assert_eq!(policy.max_attempts, 2);
        assert!(policy.backoff.is_zero());
    }

    #[test]
    fn bind_address() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8501,
            ..Default::default()
        };
        assert_eq!(server.bind_address(), "0.0.0.0:8501");
    }
}
