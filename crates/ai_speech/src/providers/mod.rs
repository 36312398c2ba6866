//! Translation and speech-synthesis adapters

pub mod google_translate;
pub mod google_tts;
