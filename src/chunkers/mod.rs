//! Chunking strategies for partitioned documents.

mod base;
mod basic_chunker;
mod text_splitter;

pub use base::{char_len, tail_chars, Chunker};
pub use basic_chunker::BasicChunker;
pub use text_splitter::TextSplitter;
