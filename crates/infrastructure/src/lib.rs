//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! `ai_core` completion clients and the `ai_speech` translation and
//! synthesis clients. Also owns configuration loading, logging setup and
//! page templates.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use bootstrap::build_orchestrator;
pub use config::{AppConfig, LogFormat, PipelineAppConfig, ServerConfig};
pub use telemetry::{TelemetryError, init_logging};
pub use templates::{PAGE_TEMPLATE, TemplateContext, TemplateEngine, TemplateError};
