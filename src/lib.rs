//! Uploader Service Library
//!
//! Document ingestion relay for RAG pipelines: partitions documents from a
//! shared folder, chunks them with overlap and forwards the chunks to a
//! downstream service.

pub mod api;
pub mod batch;
pub mod chunkers;
pub mod error;
pub mod output;
pub mod partitioners;
pub mod processing;
pub mod router;
pub mod types;

pub use batch::{discover_files, BatchConfig, BatchProcessor};
pub use chunkers::{BasicChunker, Chunker};
pub use error::{IngestError, Result};
pub use output::{HttpRelayClient, Relay};
pub use partitioners::{DocumentFormat, Partitioner};
pub use processing::FileProcessor;
pub use router::PartitionRouter;
pub use types::{ChunkConfig, Element, ElementKind, TextChunk, UploaderConfig};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::batch::*;
    pub use crate::chunkers::{BasicChunker, Chunker};
    pub use crate::error::{IngestError, Result};
    pub use crate::output::{HttpRelayClient, Relay};
    pub use crate::partitioners::{DocumentFormat, Partitioner};
    pub use crate::processing::FileProcessor;
    pub use crate::router::PartitionRouter;
    pub use crate::types::*;
}

/// Default maximum chunk length in characters
pub const DEFAULT_MAX_CHARACTERS: usize = 500;

/// Default chunk overlap in characters
pub const DEFAULT_CHUNK_OVERLAP: usize = 50;

/// Default shared directory documents are read from
pub const DEFAULT_DOCS_DIR: &str = "/app/recipes";

/// Default downstream endpoint receiving the chunks
pub const DEFAULT_RELAY_URL: &str = "http://app:3000/api/upload-chunks";

/// Default HTTP listen port
pub const DEFAULT_PORT: u16 = 8000;
