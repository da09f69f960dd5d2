//! Basic element chunker: packs whole elements, splits oversized ones.

use super::base::{char_len, tail_chars, Chunker};
use super::text_splitter::TextSplitter;
use crate::types::{ChunkConfig, Element, TextChunk};

/// Separator placed between elements packed into the same chunk.
const ELEMENT_SEPARATOR: &str = "\n\n";

/// Chunker that fills each chunk with consecutive elements up to the
/// character limit.
///
/// An element too large for a chunk of its own is split by a
/// [`TextSplitter`]. With `overlap_all`, every chunk after the first starts
/// with the tail of the previous chunk; the prefix counts toward the limit.
pub struct BasicChunker;

impl BasicChunker {
    /// Create a new basic chunker.
    pub fn new() -> Self {
        Self
    }
}

impl Default for BasicChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunker for BasicChunker {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn description(&self) -> &'static str {
        "Packs elements into fixed-size character chunks with overlap"
    }

    fn chunk(&self, elements: &[Element], config: &ChunkConfig) -> Vec<TextChunk> {
        let mut builder = ChunkBuilder::new(config);

        for element in elements {
            let text = element.text.trim();
            if !text.is_empty() {
                builder.add(text);
            }
        }

        builder.finish()
    }
}

/// Accumulates element texts into chunks.
struct ChunkBuilder<'a> {
    max_chars: usize,
    overlap: usize,
    overlap_all: bool,
    splitter: TextSplitter,
    chunks: Vec<TextChunk>,
    pending: Vec<&'a str>,
    pending_len: usize,
}

impl<'a> ChunkBuilder<'a> {
    fn new(config: &ChunkConfig) -> Self {
        let max_chars = config.effective_max();
        let overlap = config.effective_overlap();
        Self {
            max_chars,
            overlap,
            overlap_all: config.overlap_all,
            splitter: TextSplitter::new(max_chars, overlap),
            chunks: Vec::new(),
            pending: Vec::new(),
            pending_len: 0,
        }
    }

    fn add(&mut self, text: &'a str) {
        let text_len = char_len(text);

        if !self.pending.is_empty() {
            let combined = self.pending_len + ELEMENT_SEPARATOR.len() + text_len;
            if self.prefix_len() + combined <= self.max_chars {
                self.pending.push(text);
                self.pending_len = combined;
                return;
            }
            self.flush();
        }

        if self.prefix_len() + text_len <= self.max_chars {
            self.pending.push(text);
            self.pending_len = text_len;
        } else {
            self.split_oversized(text);
        }
    }

    /// Tail of the previous chunk repeated at the start of the next one.
    fn overlap_prefix(&self) -> Option<String> {
        if !self.overlap_all || self.overlap == 0 {
            return None;
        }
        let last = self.chunks.last()?;
        let tail = tail_chars(&last.text, self.overlap).trim_start();
        if tail.is_empty() {
            None
        } else {
            Some(tail.to_string())
        }
    }

    /// Characters taken by the prefix and its separating space.
    fn prefix_len(&self) -> usize {
        self.overlap_prefix().map_or(0, |p| char_len(&p) + 1)
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let body = self.pending.join(ELEMENT_SEPARATOR);
        let element_count = self.pending.len();
        self.pending.clear();
        self.pending_len = 0;

        let (text, overlap_chars) = match self.overlap_prefix() {
            Some(prefix) => {
                let prefix_chars = char_len(&prefix);
                (format!("{} {}", prefix, body), prefix_chars)
            }
            None => (body, 0),
        };

        let index = self.chunks.len();
        self.chunks
            .push(TextChunk::new(text, index, element_count).with_overlap(overlap_chars));
    }

    fn split_oversized(&mut self, text: &str) {
        let (source, first_overlap) = match self.overlap_prefix() {
            Some(prefix) => (format!("{} {}", prefix, text), char_len(&prefix)),
            None => (text.to_string(), 0),
        };

        for (i, fragment) in self.splitter.split(&source).into_iter().enumerate() {
            let overlap_chars = if i == 0 { first_overlap } else { self.overlap };
            let index = self.chunks.len();
            self.chunks
                .push(TextChunk::new(fragment, index, 1).with_overlap(overlap_chars));
        }
    }

    fn finish(mut self) -> Vec<TextChunk> {
        self.flush();
        self.chunks
    }
}
