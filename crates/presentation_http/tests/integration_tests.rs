//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::{
    AnswerOrchestrator, ApplicationError, CompletionPort, CredentialSet, PipelineConfig,
    SpeechPort, SpeechSynthesizer, SynthesisRetryPolicy, TranslationPort, Translator,
};
use async_trait::async_trait;
use axum_test::TestServer;
use domain::{ProviderKind, ProviderResult, Question};
use infrastructure::{AppConfig, TemplateEngine};
use presentation_http::{routes::create_router, state::AppState};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

/// Provider that answers with a fixed text when given the expected key
struct FixedProvider {
    kind: ProviderKind,
    answer: &'static str,
}

#[async_trait]
impl CompletionPort for FixedProvider {
    async fn complete(&self, _question: &Question, api_key: &SecretString) -> ProviderResult {
        if api_key.expose_secret().starts_with("bad") {
            ProviderResult::http_status(401)
        } else {
            ProviderResult::Answer(self.answer.to_string())
        }
    }

    fn provider(&self) -> ProviderKind {
        self.kind
    }
}

struct HindiTranslation;

#[async_trait]
impl TranslationPort for HindiTranslation {
    async fn translate(&self, _text: &str, _target: &str) -> Result<String, ApplicationError> {
        Ok("चार".to_string())
    }
}

/// Synthesizes every text except the word "silence"
struct StubSpeech;

#[async_trait]
impl SpeechPort for StubSpeech {
    async fn synthesize(
        &self,
        text: &str,
        _language: &str,
        _regional_variant: &str,
    ) -> Result<Vec<u8>, ApplicationError> {
        if text == "silence" {
            Err(ApplicationError::Synthesis("503".to_string()))
        } else {
            Ok(b"ID3\x04\x00".to_vec())
        }
    }
}

fn create_test_server(env_credentials: CredentialSet) -> TestServer {
    let providers: Vec<Arc<dyn CompletionPort>> = vec![
        Arc::new(FixedProvider {
            kind: ProviderKind::Groq,
            answer: "silence",
        }),
        Arc::new(FixedProvider {
            kind: ProviderKind::OpenAi,
            answer: "4",
        }),
        Arc::new(FixedProvider {
            kind: ProviderKind::Anthropic,
            answer: "Four",
        }),
    ];

    let orchestrator = AnswerOrchestrator::new(
        providers,
        Translator::new(Arc::new(HindiTranslation)),
        SpeechSynthesizer::with_policy(Arc::new(StubSpeech), SynthesisRetryPolicy::immediate(3)),
        PipelineConfig::default(),
    );

    let state = AppState {
        orchestrator: Arc::new(orchestrator),
        env_credentials: Arc::new(env_credentials),
        templates: TemplateEngine::new().expect("templates compile"),
        config: Arc::new(AppConfig::default()),
    };

    TestServer::new(create_router(state)).expect("Failed to create test server")
}

fn openai_env() -> CredentialSet {
    CredentialSet::new().with(ProviderKind::OpenAi, "sk-env")
}

// ============================================================================
// Health and status
// ============================================================================

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = create_test_server(CredentialSet::new());
    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn status_lists_env_credentials() {
    let server = create_test_server(openai_env());
    let response = server.get("/v1/system/status").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let providers = body["providers"].as_array().expect("providers array");
    assert_eq!(providers.len(), 3);
    assert_eq!(providers[0]["provider"], "openai");
    assert_eq!(providers[0]["configured"], true);
    assert_eq!(providers[0]["model"], "gpt-3.5-turbo");
    assert_eq!(providers[1]["configured"], false);
    assert_eq!(providers[2]["credential_env_var"], "GROQ_API_KEY");
    assert_eq!(body["speech"]["translate_before_speech"], true);
    assert_eq!(body["speech"]["max_chunk_chars"], 150);
}

// ============================================================================
// Page
// ============================================================================

#[tokio::test]
async fn index_shows_prompt_and_missing_key_fields() {
    let server = create_test_server(openai_env());
    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Gyan AI"));
    assert!(html.contains("✅ OpenAI"));
    assert!(html.contains("❌ Claude"));
    assert!(!html.contains("name=\"openai_api_key\""));
    assert!(html.contains("name=\"anthropic_api_key\""));
    assert!(html.contains("name=\"groq_api_key\""));
    assert!(!html.contains("class=\"section\""));
}

#[tokio::test]
async fn empty_question_shows_warning_and_no_sections() {
    let server = create_test_server(openai_env());
    let response = server
        .post("/ask")
        .form(&[("question", "   "), ("locale", "en")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Please enter a question!"));
    assert!(!html.contains("class=\"section\""));
}

#[tokio::test]
async fn no_credentials_renders_only_the_prompt() {
    let server = create_test_server(CredentialSet::new());
    let response = server
        .post("/ask")
        .form(&[("question", "What is 2+2?"), ("locale", "en")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(!html.contains("class=\"section\""));
    assert!(!html.contains("class=\"warning\""));
    assert!(html.contains("What is 2+2?"));
}

#[tokio::test]
async fn form_answer_renders_section_with_player() {
    let server = create_test_server(openai_env());
    let response = server
        .post("/ask")
        .form(&[("question", "What is 2+2?"), ("locale", "en")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<h3>OpenAI GPT-3.5</h3>"));
    assert!(html.contains("<p>4</p>"));
    assert!(html.contains("part 1 of 1"));
    assert!(html.contains("data:audio&#x2F;mpeg;base64,"));
    assert!(!html.contains("Anthropic Claude"));
}

#[tokio::test]
async fn page_keys_fill_in_missing_providers() {
    let server = create_test_server(openai_env());
    let response = server
        .post("/ask")
        .form(&[
            ("question", "What is 2+2?"),
            ("locale", "en"),
            ("anthropic_api_key", "bad-key"),
            ("groq_api_key", "gsk-page"),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("✅ Claude"));
    assert!(html.contains("<p class=\"error\">❌ Error: 401</p>"));
    assert!(html.contains("<h3>Groq Llama</h3>"));
    assert!(html.contains("Audio unavailable: 1 part skipped"));

    let openai = html.find("OpenAI GPT-3.5").expect("openai section");
    let claude = html.find("Anthropic Claude").expect("claude section");
    let groq = html.find("Groq Llama").expect("groq section");
    assert!(openai < claude && claude < groq);
}

// ============================================================================
// JSON API
// ============================================================================

#[tokio::test]
async fn ask_returns_report_with_translated_audio() {
    let server = create_test_server(openai_env());
    let response = server
        .post("/v1/ask")
        .json(&json!({"question": "What is 2+2?", "locale": "hindi"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["locale"], "hindi");
    let sections = body["sections"].as_array().expect("sections array");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["provider"], "openai");
    assert_eq!(sections[0]["text"], "4");
    assert_eq!(sections[0]["answered"], true);
    assert_eq!(sections[0]["audio"]["spoken_text"], "चार");
    assert_eq!(sections[0]["audio"]["segments"][0]["chunk_index"], 0);
    assert_eq!(sections[0]["audio"]["segments"][0]["mime_type"], "audio/mpeg");
}

#[tokio::test]
async fn env_key_wins_over_supplied_key() {
    let server = create_test_server(openai_env());
    let response = server
        .post("/v1/ask")
        .json(&json!({"question": "What is 2+2?", "api_keys": {"openai": "bad-key"}}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["sections"][0]["answered"], true);
}

#[tokio::test]
async fn ask_rejects_empty_question() {
    let server = create_test_server(openai_env());

    let response = server.post("/v1/ask").json(&json!({"question": ""})).await;
    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "bad_request");

    let response = server.post("/v1/ask").json(&json!({"question": "  "})).await;
    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Question cannot be empty");
}

#[tokio::test]
async fn ask_rejects_unknown_locale() {
    let server = create_test_server(openai_env());
    let response = server
        .post("/v1/ask")
        .json(&json!({"question": "hi", "locale": "klingon"}))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn stream_emits_progress_then_done() {
    let server = create_test_server(openai_env());
    let response = server
        .post("/v1/ask/stream")
        .json(&json!({"question": "What is 2+2?"}))
        .await;

    response.assert_status_ok();
    let content_type = response.header("content-type");
    assert!(content_type.to_str().expect("ascii").contains("text/event-stream"));

    let text = response.text();
    let first = text.find("\"stage\":\"idle\"").expect("idle event");
    let dispatch = text.find("Getting OpenAI response...").expect("dispatch event");
    let rendered = text.find("English audio ready!").expect("rendered event");
    let done = text.find("event: done").expect("done event");
    assert!(first < dispatch && dispatch < rendered && rendered < done);
    assert!(text.contains("event: progress"));
    assert!(text.contains("Claude skipped: no API key"));
}

#[tokio::test]
async fn stream_rejects_empty_question() {
    let server = create_test_server(openai_env());
    let response = server
        .post("/v1/ask/stream")
        .json(&json!({"question": ""}))
        .await;

    response.assert_status_bad_request();
}
