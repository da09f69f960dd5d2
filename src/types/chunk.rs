//! Chunk type definitions.

use serde::{Deserialize, Serialize};

/// A bounded-length text span built from one or more elements.
///
/// Chunks are the unit that gets forwarded to the relay. Consecutive chunks
/// may share a prefix/suffix overlap to keep context across boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChunk {
    /// The chunk text, overlap prefix included
    pub text: String,

    /// Order of this chunk within its document (0-indexed)
    pub chunk_index: usize,

    /// Number of elements that contributed text to this chunk
    pub element_count: usize,

    /// Number of leading characters repeated from the previous chunk
    pub overlap_chars: usize,
}

impl TextChunk {
    /// Create a new chunk.
    pub fn new(text: String, chunk_index: usize, element_count: usize) -> Self {
        Self {
            text,
            chunk_index,
            element_count,
            overlap_chars: 0,
        }
    }

    /// Record how many leading characters came from the previous chunk.
    pub fn with_overlap(mut self, overlap_chars: usize) -> Self {
        self.overlap_chars = overlap_chars;
        self
    }

    /// Length of the chunk in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the chunk is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for TextChunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
