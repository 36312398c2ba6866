//! Text chunking for speech synthesis
//!
//! Splits arbitrarily long text into word-aligned chunks short enough for a
//! single synthesis call. Lengths are counted in characters, not bytes.

use serde::{Deserialize, Serialize};

/// A word-aligned piece of an answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChunk {
    /// Zero-based position of this chunk within its answer
    pub index: usize,
    /// Chunk text; words separated by single spaces
    pub text: String,
}

impl TextChunk {
    /// Length in characters
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the chunk is a single word longer than `max_chars`
    #[must_use]
    pub fn is_oversized_word(&self, max_chars: usize) -> bool {
        self.char_count() > max_chars && !self.text.contains(' ')
    }
}

/// Split `text` into chunks of at most `max_chars` characters
///
/// Words are accumulated greedily; a chunk closes when the next word would
/// push it past `max_chars`. Words are never split: a single word longer than
/// the limit becomes a chunk of its own. Whitespace-only input yields no
/// chunks.
///
/// # Examples
///
/// ```
/// use domain::chunk_text;
///
/// let chunks = chunk_text("one two three", 7);
/// let texts: Vec<_> = chunks.iter().map(|c| c.text.as_str()).collect();
/// assert_eq!(texts, vec!["one two", "three"]);
///
/// assert!(chunk_text("   ", 10).is_empty());
/// ```
#[must_use]
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<TextChunk> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
            continue;
        }

        if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            chunks.push(TextChunk {
                index: chunks.len(),
                text: std::mem::take(&mut current),
            });
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        chunks.push(TextChunk {
            index: chunks.len(),
            text: current,
        });
    }

    chunks
}
