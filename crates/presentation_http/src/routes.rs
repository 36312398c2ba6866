//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Page
        .route("/", get(handlers::page::index))
        .route("/ask", post(handlers::page::ask))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/v1/system/status", get(handlers::system::status))
        // Ask API (v1)
        .route("/v1/ask", post(handlers::ask::ask))
        .route("/v1/ask/stream", post(handlers::ask::ask_stream))
        // Attach state
        .with_state(state)
}
