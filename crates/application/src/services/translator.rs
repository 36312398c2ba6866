//! Translator - Turns an English answer into the listener's language

use std::{fmt, sync::Arc};

use domain::VoiceLocale;
use tracing::{debug, instrument, warn};

use crate::ports::TranslationPort;

/// Translation with identity for English and fallback to the source text
#[derive(Clone)]
pub struct Translator {
    port: Arc<dyn TranslationPort>,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator").finish_non_exhaustive()
    }
}

impl Translator {
    /// Create a translator over a translation backend
    pub fn new(port: Arc<dyn TranslationPort>) -> Self {
        Self { port }
    }

    /// Translate `text` for `locale`
    ///
    /// English returns `text` unchanged without touching the backend. Any
    /// backend failure, or a blank translation, also returns `text`.
    #[instrument(skip(self, text), fields(locale = %locale.display_name()))]
    pub async fn translate(&self, text: &str, locale: VoiceLocale) -> String {
        if locale.is_default() {
            return text.to_string();
        }

        match self.port.translate(text, locale.language_code()).await {
            Ok(translated) if !translated.trim().is_empty() => {
                debug!(chars = translated.chars().count(), "Answer translated");
                translated
            },
            Ok(_) => {
                warn!("Translation came back empty, using source text");
                text.to_string()
            },
            Err(e) => {
                warn!(error = %e, "Translation failed, using source text");
                text.to_string()
            },
        }
    }
}
