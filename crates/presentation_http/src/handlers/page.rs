//! Page handlers

use axum::{Form, extract::State, response::Html};
use domain::{Question, VoiceLocale};
use tracing::{info, instrument};

use crate::{
    error::ApiError,
    state::AppState,
    view::{AskForm, PageView},
};

/// Initial page: question box, locale selector and status panel
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let env = state.env_credentials.as_ref();
    let view = PageView::new(VoiceLocale::default(), env, env);
    Ok(Html(state.templates.render_page(&view)?))
}

/// Form submit: ask every configured provider and render the answers
#[instrument(skip(state, form), fields(question_len = form.question.len()))]
pub async fn ask(
    State(state): State<AppState>,
    Form(form): Form<AskForm>,
) -> Result<Html<String>, ApiError> {
    let locale = form.locale();
    let credentials = state.credentials_with(&form.credentials());
    let view = PageView::new(locale, &state.env_credentials, &credentials)
        .with_question(form.question.as_str());

    let Ok(question) = Question::new(form.question.as_str()) else {
        return Ok(Html(
            state
                .templates
                .render_page(&view.with_empty_question_warning())?,
        ));
    };

    info!(locale = %locale, providers = ?credentials.configured(), "Answering question");
    let report = state
        .orchestrator
        .answer(&question, locale, &credentials)
        .await;

    Ok(Html(state.templates.render_page(&view.with_report(&report))?))
}
