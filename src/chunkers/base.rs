//! Base trait and character helpers for all chunkers.

use crate::types::{ChunkConfig, Element, TextChunk};

/// The core trait that all chunkers must implement.
///
/// A chunker takes the ordered elements of one document and combines or
/// splits them into bounded-size chunks suitable for embedding.
pub trait Chunker: Send + Sync {
    /// Get the name of this chunker.
    fn name(&self) -> &'static str;

    /// Chunk the given elements with the provided configuration.
    ///
    /// # Arguments
    /// * `elements` - Elements of one document, in document order
    /// * `config` - Configuration for chunking
    ///
    /// # Returns
    /// Chunks in document order, none longer than `config.max_characters`.
    fn chunk(&self, elements: &[Element], config: &ChunkConfig) -> Vec<TextChunk>;

    /// Get the description of this chunker.
    fn description(&self) -> &'static str {
        "A text chunker"
    }
}

/// Length of `text` in characters.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// The last `n` characters of `text`.
pub fn tail_chars(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}
