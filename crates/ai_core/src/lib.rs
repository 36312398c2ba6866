//! AI Core - Chat completion clients
//!
//! Clients for the three answer providers (OpenAI, Anthropic, Groq).
//! Each call is a single non-streaming, single-turn HTTP request.

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;

pub use config::{ProviderConfig, ProvidersConfig};
pub use error::InferenceError;
pub use ports::{CompletionClient, CompletionResponse};
pub use providers::{ApiStyle, ProviderClient, build_clients};
