//! Configuration for translation and speech synthesis

use serde::{Deserialize, Serialize};

/// Configuration for the translation and speech-synthesis endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Translation endpoint (GET, `client=gtx` query)
    #[serde(default = "default_translate_url")]
    pub translate_url: String,

    /// Translation request timeout in milliseconds
    #[serde(default = "default_translate_timeout_ms")]
    pub translate_timeout_ms: u64,

    /// Speech-synthesis endpoint; `{tld}` is replaced by the locale's
    /// regional variant (`com`, `co.in`)
    #[serde(default = "default_tts_url_template")]
    pub tts_url_template: String,

    /// Synthesis request timeout in milliseconds
    #[serde(default = "default_tts_timeout_ms")]
    pub tts_timeout_ms: u64,

    /// Speaking speed sent as `ttsspeed` (1.0 is normal)
    #[serde(default = "default_speed")]
    pub speed: f32,
}

/// Placeholder for the regional variant in `tts_url_template`
pub const TLD_PLACEHOLDER: &str = "{tld}";

fn default_translate_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

const fn default_translate_timeout_ms() -> u64 {
    10_000 // 10 seconds
}

fn default_tts_url_template() -> String {
    "https://translate.google.{tld}/translate_tts".to_string()
}

const fn default_tts_timeout_ms() -> u64 {
    30_000 // 30 seconds
}

const fn default_speed() -> f32 {
    1.0
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            translate_url: default_translate_url(),
            translate_timeout_ms: default_translate_timeout_ms(),
            tts_url_template: default_tts_url_template(),
            tts_timeout_ms: default_tts_timeout_ms(),
            speed: default_speed(),
        }
    }
}

impl SpeechConfig {
    /// Synthesis URL for a regional variant
    #[must_use]
    pub fn tts_url(&self, regional_variant: &str) -> String {
        self.tts_url_template
            .replace(TLD_PLACEHOLDER, regional_variant)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.translate_url.trim().is_empty() {
            return Err("Translation URL must not be empty".to_string());
        }
        if self.tts_url_template.trim().is_empty() {
            return Err("Speech URL template must not be empty".to_string());
        }

        if !(0.1..=1.0).contains(&self.speed) {
            return Err(format!(
                "Speed must be between 0.1 and 1.0, got {}",
                self.speed
            ));
        }

        if self.translate_timeout_ms == 0 || self.tts_timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = SpeechConfig::default();

        assert_eq!(
            config.translate_url,
            "https://translate.googleapis.com/translate_a/single"
        );
        assert_eq!(config.translate_timeout_ms, 10_000);
        assert_eq!(config.tts_timeout_ms, 30_000);
        assert!((config.speed - 1.0).abs() < f32::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn tts_url_substitutes_regional_variant() {
        let config = SpeechConfig::default();
        assert_eq!(
            config.tts_url("co.in"),
            "https://translate.google.co.in/translate_tts"
        );
        assert_eq!(
            config.tts_url("com"),
            "https://translate.google.com/translate_tts"
        );
    }

    #[test]
    fn tts_url_without_placeholder_is_used_verbatim() {
        let config = SpeechConfig {
            tts_url_template: "http://127.0.0.1:9000/translate_tts".to_string(),
            ..Default::default()
        };
        assert_eq!(config.tts_url("co.in"), "http://127.0.0.1:9000/translate_tts");
    }

    #[test]
    fn validate_fails_with_invalid_speed() {
        let mut config = SpeechConfig::default();
        config.speed = 0.0;
        assert!(config.validate().is_err());

        config.speed = 2.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_fails_with_zero_timeout() {
        let config = SpeechConfig {
            translate_timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_fails_with_empty_url() {
        let config = SpeechConfig {
            tts_url_template: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_deserializes_from_toml() {
        let toml = r#"
            translate_url = "http://localhost:9000/translate"
            translate_timeout_ms = 5000
            speed = 0.8
        "#;

        let config: SpeechConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.translate_url, "http://localhost:9000/translate");
        assert_eq!(config.translate_timeout_ms, 5000);
        assert_eq!(
            config.tts_url_template,
            "https://translate.google.{tld}/translate_tts"
        );
        assert!((config.speed - 0.8).abs() < f32::EPSILON);
    }
}
