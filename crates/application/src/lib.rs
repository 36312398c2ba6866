//! Application layer - Use cases and orchestration
//!
//! Contains the response cycle for one question, the ports it needs from
//! adapters, and the report it produces.

pub mod credentials;
pub mod error;
pub mod ports;
pub mod report;
pub mod services;

pub use credentials::CredentialSet;
pub use error::ApplicationError;
pub use ports::*;
pub use report::{ProviderSection, ResponseReport, SpokenAnswer};
pub use services::*;
