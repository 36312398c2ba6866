//! System handlers

use axum::{Json, extract::State};
use domain::{ProviderKind, VoiceLocale};
use serde::Serialize;

use crate::state::AppState;

/// Provider line of the status response
#[derive(Debug, Serialize)]
pub struct ProviderStatus {
    pub provider: ProviderKind,
    pub name: &'static str,
    pub model: String,
    /// Whether a key was found in the environment
    pub configured: bool,
    pub credential_env_var: &'static str,
}

/// Speech settings of the status response
#[derive(Debug, Serialize)]
pub struct SpeechStatus {
    pub translate_before_speech: bool,
    pub max_chunk_chars: usize,
    pub synthesis_max_attempts: u32,
    pub locales: Vec<VoiceLocale>,
}

/// System status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub version: String,
    pub providers: Vec<ProviderStatus>,
    pub speech: SpeechStatus,
}

/// Get system status
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let providers = ProviderKind::ALL
        .iter()
        .map(|&kind| ProviderStatus {
            provider: kind,
            name: kind.short_name(),
            model: state.config.providers.get(kind).model.clone(),
            configured: state.env_credentials.has(kind),
            credential_env_var: kind.credential_env_var(),
        })
        .collect();

    let pipeline = &state.config.pipeline;

    Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        providers,
        speech: SpeechStatus {
            translate_before_speech: pipeline.translate_before_speech,
            max_chunk_chars: pipeline.max_chunk_chars,
            synthesis_max_attempts: pipeline.synthesis_max_attempts,
            locales: VoiceLocale::ALL.to_vec(),
        },
    })
}
