//! Domain entities - Objects with identity and lifecycle

mod audio_segment;
mod playback_sequence;
mod provider_result;
mod text_chunk;

pub use audio_segment::{AudioSegment, MP3_MIME_TYPE};
pub use playback_sequence::{PlaybackSequence, PlaybackState};
pub use provider_result::{FAILURE_PREFIX, ProviderOutcome, ProviderResult};
pub use text_chunk::{TextChunk, chunk_text};
