//! Template engine module for rendering the question page
//!
//! Uses Tera templating engine with auto-escaping. Templates are embedded
//! at compile time.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::{TemplateEngine, TemplateContext};
//!
//! let engine = TemplateEngine::new()?;
//!
//! let mut ctx = TemplateContext::new();
//! ctx.insert("title", "Gyan AI");
//!
//! let html = engine.render(PAGE_TEMPLATE, &ctx)?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tera::{Context, Tera, Value};
use thiserror::Error;
use tracing::debug;

/// Name of the question and answers page template
pub const PAGE_TEMPLATE: &str = "page.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),

    /// Invalid template context
    #[error("Invalid context: {0}")]
    Context(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Template context wrapper for type-safe context building
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    inner: Context,
}

impl TemplateContext {
    /// Create a new empty template context
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Context::new(),
        }
    }

    /// Build a context from any serializable struct
    ///
    /// Each top-level field becomes a template variable.
    pub fn from_serialize(value: &impl Serialize) -> Result<Self, TemplateError> {
        Context::from_serialize(value)
            .map(|inner| Self { inner })
            .map_err(|e| TemplateError::Context(e.to_string()))
    }

    /// Insert a value into the context
    pub fn insert<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        self.inner.insert(key, value);
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const PAGE: &str = include_str!("page.html");
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine").finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a new template engine with the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_template(PAGE_TEMPLATE, embedded::PAGE)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        // Register custom filters
        tera.register_filter("linebreaksbr", linebreaksbr_filter);

        debug!(templates = tera.get_template_names().count(), "Templates compiled");

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a template with the given context
    pub fn render(
        &self,
        template_name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, &context.inner)
            .map_err(TemplateError::from)
    }

    /// Render the page from a serializable view
    pub fn render_page(&self, view: &impl Serialize) -> Result<String, TemplateError> {
        self.render(PAGE_TEMPLATE, &TemplateContext::from_serialize(view)?)
    }

    /// Check if a template exists
    #[must_use]
    pub fn template_exists(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }
}

/// Custom filter: Convert newlines to <br> tags
fn linebreaksbr_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("linebreaksbr requires a string"))?;
    Ok(Value::String(s.replace('\n', "<br>\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_view() -> serde_json::Value {
        json!({
            "title": "Gyan AI",
            "question": "",
            "locales": [
                {"value": "english", "label": "English", "selected": true},
                {"value": "hindi", "label": "Hindi", "selected": false}
            ],
            "credential_fields": [],
            "status": [
                {"label": "OpenAI", "configured": true},
                {"label": "Claude", "configured": false}
            ],
            "speech_label": "TTS (English, Hindi, Kannada)",
            "warning": null,
            "sections": []
        })
    }

    #[test]
    fn engine_compiles_embedded_templates() {
        let engine = TemplateEngine::new().unwrap();
        assert!(engine.template_exists(PAGE_TEMPLATE));
        assert!(!engine.template_exists("missing.html"));
    }

    #[test]
    fn empty_page_shows_only_the_prompt() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine.render_page(&base_view()).unwrap();

        assert!(html.contains("<form method=\"post\" action=\"/ask\">"));
        assert!(html.contains("✅ OpenAI"));
        assert!(html.contains("❌ Claude"));
        assert!(!html.contains("class=\"section\""));
        assert!(!html.contains("class=\"warning\""));
        assert!(html.contains("<option value=\"english\" selected>English</option>"));
    }

    #[test]
    fn warning_banner_is_rendered() {
        let engine = TemplateEngine::new().unwrap();
        let mut view = base_view();
        view["warning"] = json!("Please enter a question!");

        let html = engine.render_page(&view).unwrap();
        assert!(html.contains("<p class=\"warning\">Please enter a question!</p>"));
    }

    #[test]
    fn answer_section_with_player() {
        let engine = TemplateEngine::new().unwrap();
        let mut view = base_view();
        view["sections"] = json!([{
            "heading": "OpenAI GPT-3.5",
            "text": "Line one\n<b>two</b>",
            "is_error": false,
            "audio": {
                "sources": ["data:audio/mpeg;base64,AAA", "data:audio/mpeg;base64,BBB"],
                "label": "part 1 of 2",
                "notice": null
            }
        }]);

        let html = engine.render_page(&view).unwrap();
        assert!(html.contains("<h3>OpenAI GPT-3.5</h3>"));
        assert!(html.contains("Line one<br>"));
        assert!(html.contains("&lt;b&gt;two&lt;&#x2F;b&gt;"));
        assert!(html.contains("base64,AAA\"></audio>"));
        assert!(html.contains("part 1 of 2"));
    }

    #[test]
    fn failed_audio_shows_notice() {
        let engine = TemplateEngine::new().unwrap();
        let mut view = base_view();
        view["sections"] = json!([{
            "heading": "Groq Llama",
            "text": "4",
            "is_error": false,
            "audio": {"sources": [], "label": null, "notice": "Audio unavailable: 1 part skipped"}
        }]);

        let html = engine.render_page(&view).unwrap();
        assert!(html.contains("Audio unavailable: 1 part skipped"));
        assert!(!html.contains("<audio"));
    }

    #[test]
    fn error_section_is_marked() {
        let engine = TemplateEngine::new().unwrap();
        let mut view = base_view();
        view["sections"] = json!([{
            "heading": "Anthropic Claude",
            "text": "❌ Error: 401",
            "is_error": true,
            "audio": null
        }]);

        let html = engine.render_page(&view).unwrap();
        assert!(html.contains("<p class=\"error\">❌ Error: 401</p>"));
    }

    #[test]
    fn credential_fields_are_password_inputs() {
        let engine = TemplateEngine::new().unwrap();
        let mut view = base_view();
        view["credential_fields"] = json!([
            {"name": "groq_api_key", "label": "Groq API key", "env_var": "GROQ_API_KEY"}
        ]);

        let html = engine.render_page(&view).unwrap();
        assert!(html.contains("type=\"password\" id=\"groq_api_key\" name=\"groq_api_key\""));
    }

    #[test]
    fn linebreaksbr_filter_rejects_non_string() {
        let result = linebreaksbr_filter(&json!(1), &HashMap::new());
        assert!(result.is_err());
    }
}
