//! Batch processing of every document in the shared directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::output::{no_chunks_payload, Relay};
use crate::partitioners::DocumentFormat;
use crate::processing::{is_hidden, FileProcessor};
use crate::types::FileOutcome;

/// Configuration for batch processing.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Shared directory to scan (not recursive)
    pub docs_dir: PathBuf,
    /// Report files that match no supported pattern as failures
    pub report_unsupported: bool,
}

impl BatchConfig {
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            report_unsupported: true,
        }
    }

    /// Enable or disable reporting of unsupported files.
    pub fn with_report_unsupported(mut self, report: bool) -> Self {
        self.report_unsupported = report;
        self
    }
}

/// List the files of `dir` to process, in batch order.
///
/// Files are grouped by suffix pattern in the fixed order of
/// [`DocumentFormat::batch_patterns`], keeping directory enumeration order
/// within a group. Matching is case-sensitive and hidden files are skipped, like a
/// shell glob. With `include_unmatched`, the remaining regular files follow.
/// A missing directory yields no files.
pub fn discover_files(dir: &Path, include_unmatched: bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        warn!(dir = %dir.display(), "Shared directory does not exist");
        return Ok(Vec::new());
    }

    let patterns = DocumentFormat::batch_patterns();
    let mut groups: Vec<Vec<PathBuf>> = vec![Vec::new(); patterns.len()];
    let mut unmatched = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if is_hidden(&name) {
            continue;
        }

        match patterns
            .iter()
            .position(|suffix| name.ends_with(suffix))
        {
            Some(group) => groups[group].push(path),
            None => unmatched.push(path),
        }
    }

    let mut files: Vec<PathBuf> = groups.into_iter().flatten().collect();
    if include_unmatched {
        files.extend(unmatched);
    }
    Ok(files)
}

/// Batch processor over the shared directory.
///
/// Files are handled one after another; a failing file is recorded in its
/// outcome and never stops the batch.
pub struct BatchProcessor {
    processor: Arc<FileProcessor>,
    relay: Arc<dyn Relay>,
    config: BatchConfig,
}

impl BatchProcessor {
    /// Create a new batch processor.
    pub fn new(processor: Arc<FileProcessor>, relay: Arc<dyn Relay>, config: BatchConfig) -> Self {
        Self {
            processor,
            relay,
            config,
        }
    }

    /// Process every discovered file and return one outcome per file.
    pub async fn process_all(&self) -> Result<Vec<FileOutcome>> {
        let files = discover_files(&self.config.docs_dir, self.config.report_unsupported)?;
        info!(
            dir = %self.config.docs_dir.display(),
            files = files.len(),
            "Starting batch processing"
        );

        let mut outcomes = Vec::with_capacity(files.len());
        for path in files {
            outcomes.push(self.process_one(path).await);
        }

        let failed = outcomes.iter().filter(|o| o.is_failure()).count();
        info!(
            processed = outcomes.len() - failed,
            failed,
            "Batch processing complete"
        );

        Ok(outcomes)
    }

    async fn process_one(&self, path: PathBuf) -> FileOutcome {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match Arc::clone(&self.processor).process_blocking(path).await {
            Ok(texts) => {
                let next_response = if texts.is_empty() {
                    no_chunks_payload()
                } else {
                    self.relay.send_chunks(&texts).await
                };
                debug!(file = %file, chunks = texts.len(), "File processed");

                FileOutcome::Processed {
                    file,
                    processed: texts.len(),
                    next_response,
                }
            }
            Err(e) => {
                warn!(file = %file, error = %e, "Failed to process file, continuing with others");
                FileOutcome::Failed {
                    file,
                    error: e.to_string(),
                }
            }
        }
    }
}
