//! Audio segment - One synthesized clip for one text chunk

use std::fmt;

/// MIME type of clips produced by the speech backend
pub const MP3_MIME_TYPE: &str = "audio/mpeg";

/// Encoded audio for exactly one [`TextChunk`](crate::TextChunk)
///
/// Position and total count are assigned when the segment joins a
/// [`PlaybackSequence`](crate::PlaybackSequence); until then a segment only
/// knows which chunk it was made from.
#[derive(Clone, PartialEq, Eq)]
pub struct AudioSegment {
    data: Vec<u8>,
    mime_type: &'static str,
    chunk_index: usize,
    index: usize,
    total: usize,
}

impl AudioSegment {
    /// Create an MP3 segment for the chunk at `chunk_index`
    #[must_use]
    pub const fn mp3(chunk_index: usize, data: Vec<u8>) -> Self {
        Self {
            data,
            mime_type: MP3_MIME_TYPE,
            chunk_index,
            index: 0,
            total: 1,
        }
    }

    /// Encoded audio bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the encoded bytes
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// MIME type of the encoded bytes
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// Zero-based index of the chunk this clip was synthesized from
    #[must_use]
    pub const fn chunk_index(&self) -> usize {
        self.chunk_index
    }

    /// Zero-based position within the playback sequence
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of segments in the playback sequence
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Size of the encoded audio in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn set_position(&mut self, index: usize, total: usize) {
        self.index = index;
        self.total = total;
    }
}

// Audio payloads are large; keep them out of logs.
impl fmt::Debug for AudioSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioSegment")
            .field("mime_type", &self.mime_type)
            .field("chunk_index", &self.chunk_index)
            .field("index", &self.index)
            .field("total", &self.total)
            .field("size_bytes", &self.data.len())
            .finish()
    }
}
