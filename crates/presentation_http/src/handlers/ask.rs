//! JSON and SSE ask handlers

use std::{convert::Infallible, time::Duration};

use application::{PipelineEvent, PipelineObserver, ResponseReport};
use axum::{
    Json,
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use domain::Question;
use futures::stream::{self, Stream};
use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

use crate::{
    error::ApiError,
    extract::ValidatedJson,
    state::AppState,
    view::{AskRequest, AskResponse},
};

/// Name of the SSE event carrying a pipeline transition
pub const PROGRESS_EVENT: &str = "progress";

/// Name of the final SSE event carrying the report
pub const DONE_EVENT: &str = "done";

/// Run the pipeline and return the full report
#[instrument(skip(state, request), fields(question_len = request.question.len()))]
pub async fn ask(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    let question = Question::new(request.question.as_str())?;
    let credentials = state.credentials_with(&request.credentials());

    let report = state
        .orchestrator
        .answer(&question, request.locale, &credentials)
        .await;

    Ok(Json(AskResponse::from(&report)))
}

/// Forwards pipeline events into the SSE channel
struct ChannelObserver {
    tx: mpsc::UnboundedSender<Event>,
}

impl PipelineObserver for ChannelObserver {
    fn on_event(&self, event: &PipelineEvent) {
        match Event::default().event(PROGRESS_EVENT).json_data(event) {
            Ok(sse) => {
                // Receiver gone means the client disconnected; the run still completes
                if self.tx.send(sse).is_err() {
                    debug!(stage = %event.stage, "Progress listener went away");
                }
            },
            Err(e) => warn!(error = %e, "Failed to encode progress event"),
        }
    }
}

impl ChannelObserver {
    /// Send the closing report event; false when it could not be delivered
    fn finish(&self, report: &ResponseReport) -> bool {
        match Event::default()
            .event(DONE_EVENT)
            .json_data(AskResponse::from(report))
        {
            Ok(done) => {
                if self.tx.send(done).is_err() {
                    debug!("Report listener went away");
                    return false;
                }
                true
            },
            Err(e) => {
                warn!(error = %e, "Failed to encode report");
                false
            },
        }
    }
}

/// Run the pipeline and stream one event per transition, then the report
#[instrument(skip(state, request), fields(question_len = request.question.len()))]
pub async fn ask_stream(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AskRequest>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let question = Question::new(request.question.as_str())?;
    let credentials = state.credentials_with(&request.credentials());
    let locale = request.locale;

    let (tx, rx) = mpsc::unbounded_channel();
    let orchestrator = state.orchestrator.clone();

    tokio::spawn(async move {
        let observer = ChannelObserver { tx };
        let report = orchestrator
            .run(&question, locale, &credentials, &observer)
            .await;

        observer.finish(&report);
    });

    let events =
        stream::unfold(rx, |mut rx| async move { rx.recv().await.map(|event| (Ok(event), rx)) });

    Ok(Sse::new(events).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    ))
}
