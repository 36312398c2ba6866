//! AI Speech - Translation and Text-to-Speech clients
//!
//! Provides traits and implementations for turning an English answer into
//! spoken audio:
//! - `Translation` - Translate English text into the listener's language
//! - `TextToSpeech` - Synthesize one MP3 clip per text chunk
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{GoogleTtsProvider, SpeechConfig, TextToSpeech};
//!
//! let tts = GoogleTtsProvider::new(SpeechConfig::default())?;
//! let audio = tts.synthesize("नमस्ते", "hi", "co.in").await?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::{TextToSpeech, Translation};
pub use providers::google_translate::GoogleTranslateClient;
pub use providers::google_tts::GoogleTtsProvider;
pub use types::{AudioData, AudioFormat};
