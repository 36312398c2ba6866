//! Adapters binding external clients to application ports

mod completion_adapter;
mod env_credentials;
mod speech_adapter;

pub use completion_adapter::CompletionAdapter;
pub use env_credentials::EnvCredentialSource;
pub use speech_adapter::{SpeechAdapter, TranslationAdapter};
