//! Gyan HTTP presentation layer
//!
//! Serves the question page, the JSON ask API with its SSE progress stream,
//! and health/status endpoints.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod view;

pub use error::ApiError;
pub use extract::ValidatedJson;
pub use routes::create_router;
pub use state::AppState;
