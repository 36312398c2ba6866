//! Playback sequence - Ordered, auto-advancing playback of audio segments
//!
//! Models the player shown for one answer: the first segment is loaded but
//! waits for the user to press play, every natural end advances to the next
//! segment and starts it, and the end of the last segment completes the
//! sequence. A sequence without segments never shows a player.

use serde::{Deserialize, Serialize};

use super::audio_segment::AudioSegment;

/// Player state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// No segment survived synthesis
    Empty,
    /// Current segment loaded, waiting for user action
    Ready,
    /// Current segment playing
    Playing,
    /// Last segment finished
    Complete,
}

/// Ordered audio segments of one answer plus the player position
#[derive(Debug, Clone)]
pub struct PlaybackSequence {
    segments: Vec<AudioSegment>,
    chunk_count: usize,
    current: usize,
    state: PlaybackState,
}

impl PlaybackSequence {
    /// Build a sequence from the segments that synthesized successfully
    ///
    /// `chunk_count` is the number of chunks the answer was split into, so
    /// the sequence can report how many parts were skipped. Segments are
    /// ordered by their chunk index and numbered consecutively.
    #[must_use]
    pub fn new(mut segments: Vec<AudioSegment>, chunk_count: usize) -> Self {
        segments.sort_by_key(AudioSegment::chunk_index);
        let total = segments.len();
        for (index, segment) in segments.iter_mut().enumerate() {
            segment.set_position(index, total);
        }

        let state = if segments.is_empty() {
            PlaybackState::Empty
        } else {
            PlaybackState::Ready
        };

        Self {
            segments,
            chunk_count: chunk_count.max(total),
            current: 0,
            state,
        }
    }

    /// All segments in playback order
    #[must_use]
    pub fn segments(&self) -> &[AudioSegment] {
        &self.segments
    }

    /// Number of playable parts
    #[must_use]
    pub fn total(&self) -> usize {
        self.segments.len()
    }

    /// Number of chunks the answer was split into
    #[must_use]
    pub const fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    /// Number of chunks whose synthesis failed
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.chunk_count - self.segments.len()
    }

    /// Current player state
    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether there is nothing to play
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether the last segment has finished
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == PlaybackState::Complete
    }

    /// One-based position of the loaded segment
    #[must_use]
    pub fn current_position(&self) -> Option<usize> {
        (!self.segments.is_empty()).then_some(self.current + 1)
    }

    /// Segment currently loaded in the player
    #[must_use]
    pub fn current_segment(&self) -> Option<&AudioSegment> {
        self.segments.get(self.current)
    }

    /// Progress text, e.g. "part 2 of 3"
    #[must_use]
    pub fn position_label(&self) -> Option<String> {
        self.current_position()
            .map(|position| format!("part {position} of {}", self.total()))
    }

    /// Notice shown instead of a player when nothing can be played
    #[must_use]
    pub fn failure_notice(&self) -> Option<String> {
        if !self.is_empty() {
            return None;
        }
        if self.chunk_count == 0 {
            return Some("No text to speak".to_string());
        }
        let skipped = self.skipped();
        Some(if skipped == 1 {
            "Audio unavailable: 1 part skipped".to_string()
        } else {
            format!("Audio unavailable: {skipped} parts skipped")
        })
    }

    /// User pressed play on the loaded segment
    pub fn play(&mut self) {
        if self.state == PlaybackState::Ready {
            self.state = PlaybackState::Playing;
        }
    }

    /// The playing segment reached its natural end
    ///
    /// Loads and starts the next segment if there is one and returns it;
    /// otherwise marks the sequence complete and returns `None`.
    pub fn advance(&mut self) -> Option<&AudioSegment> {
        if self.state != PlaybackState::Playing {
            return None;
        }

        if self.current + 1 < self.segments.len() {
            self.current += 1;
            self.segments.get(self.current)
        } else {
            self.state = PlaybackState::Complete;
            None
        }
    }

    /// Rewind to the first segment without autoplay
    pub fn reset(&mut self) {
        self.current = 0;
        if !self.segments.is_empty() {
            self.state = PlaybackState::Ready;
        }
    }
}
