//! File processor for the ingestion pipeline.
//!
//! Combines format dispatch, chunking and text filtering to turn one file
//! from the shared directory into the list of texts sent to the relay.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::chunkers::{BasicChunker, Chunker};
use crate::error::{IngestError, Result};
use crate::processing::filter::{chunk_texts, is_plain_file_name};
use crate::router::PartitionRouter;
use crate::types::ChunkConfig;

/// File processor: partition, chunk, filter.
pub struct FileProcessor {
    router: PartitionRouter,
    chunker: Arc<dyn Chunker>,
    config: ChunkConfig,
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new(ChunkConfig::default())
    }
}

impl FileProcessor {
    /// Create a new file processor with the given chunk configuration.
    pub fn new(config: ChunkConfig) -> Self {
        Self {
            router: PartitionRouter::new(),
            chunker: Arc::new(BasicChunker::new()),
            config,
        }
    }

    /// Resolve a requested file name inside `dir`.
    ///
    /// Fails with `NotFound` unless the name is a plain file name naming an
    /// existing regular file.
    pub fn resolve(&self, dir: &Path, filename: &str) -> Result<PathBuf> {
        if !is_plain_file_name(filename) {
            return Err(IngestError::NotFound(filename.to_string()));
        }

        let path = dir.join(filename);
        if path.is_file() {
            Ok(path)
        } else {
            Err(IngestError::NotFound(filename.to_string()))
        }
    }

    /// Partition, chunk and filter the document at `path`.
    pub fn process(&self, path: &Path) -> Result<Vec<String>> {
        let elements = self.router.partition(path)?;
        let chunks = self.chunker.chunk(&elements, &self.config);
        let texts = chunk_texts(&chunks);

        debug!(
            path = %path.display(),
            elements = elements.len(),
            chunks = texts.len(),
            chunker = self.chunker.name(),
            "Processed file"
        );

        Ok(texts)
    }

    /// Run [`FileProcessor::process`] on the blocking thread pool.
    pub async fn process_blocking(self: Arc<Self>, path: PathBuf) -> Result<Vec<String>> {
        tokio::task::spawn_blocking(move || self.process(&path))
            .await
            .map_err(|e| IngestError::internal(format!("file processing task failed: {}", e)))?
    }
}
