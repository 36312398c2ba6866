//! Types for synthesized audio

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// Audio formats produced by the synthesis endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// MP3 format
    Mp3,
}

impl AudioFormat {
    /// Get the MIME type for this audio format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
        }
    }

    /// Get the file extension for this audio format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
        }
    }

    /// Whether the bytes start like a standalone clip of this format
    ///
    /// MP3 clips begin with an ID3 tag or an MPEG frame sync (11 set bits).
    #[must_use]
    pub fn matches_header(&self, data: &[u8]) -> bool {
        match self {
            Self::Mp3 => {
                data.starts_with(b"ID3")
                    || matches!(data, [0xFF, second, ..] if second & 0xE0 == 0xE0)
            },
        }
    }
}

/// Container for audio data with metadata
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Raw audio bytes
    data: Vec<u8>,
    /// Audio format
    format: AudioFormat,
}

impl AudioData {
    /// Create new audio data
    #[must_use]
    pub const fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    /// Get the raw audio bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw audio bytes
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the audio format
    #[must_use]
    pub const fn format(&self) -> AudioFormat {
        self.format
    }

    /// Get the size of the audio data in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Check if the audio data is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the MIME type for this audio
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Encode as a `data:` URI usable as an audio element source
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), STANDARD.encode(&self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mp3_mime_and_extension() {
        assert_eq!(AudioFormat::Mp3.mime_type(), "audio/mpeg");
        assert_eq!(AudioFormat::Mp3.extension(), "mp3");
    }

    #[test]
    fn id3_header_is_mp3() {
        assert!(AudioFormat::Mp3.matches_header(b"ID3\x04\x00rest"));
    }

    #[test]
    fn frame_sync_is_mp3() {
        assert!(AudioFormat::Mp3.matches_header(&[0xFF, 0xF3, 0x44, 0xC4]));
        assert!(AudioFormat::Mp3.matches_header(&[0xFF, 0xFB, 0x90]));
    }

    #[test]
    fn html_and_empty_are_not_mp3() {
        assert!(!AudioFormat::Mp3.matches_header(b"<html>"));
        assert!(!AudioFormat::Mp3.matches_header(&[]));
        assert!(!AudioFormat::Mp3.matches_header(&[0xFF]));
        assert!(!AudioFormat::Mp3.matches_header(&[0xFF, 0x10]));
    }

    #[test]
    fn audio_data_accessors() {
        let audio = AudioData::new(vec![0xFF, 0xFB, 1, 2], AudioFormat::Mp3);
        assert_eq!(audio.size_bytes(), 4);
        assert!(!audio.is_empty());
        assert_eq!(audio.format(), AudioFormat::Mp3);
        assert_eq!(audio.mime_type(), "audio/mpeg");
        assert_eq!(audio.data(), &[0xFF, 0xFB, 1, 2]);
        assert_eq!(audio.into_data(), vec![0xFF, 0xFB, 1, 2]);
    }

    #[test]
    fn data_uri_is_base64() {
        let audio = AudioData::new(b"ID3".to_vec(), AudioFormat::Mp3);
        assert_eq!(audio.to_data_uri(), "data:audio/mpeg;base64,SUQz");
    }
}
