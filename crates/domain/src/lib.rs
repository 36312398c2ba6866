//! Domain layer for Gyan
//!
//! Contains the core vocabulary of a response cycle: questions, providers,
//! voice locales, provider results, text chunks, audio segments and the
//! playback sequence. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
