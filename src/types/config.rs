//! Configuration types for the uploader service.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_CHUNK_OVERLAP, DEFAULT_DOCS_DIR, DEFAULT_MAX_CHARACTERS, DEFAULT_PORT,
    DEFAULT_RELAY_URL,
};

/// Global service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploaderConfig {
    /// Shared directory documents are read from
    pub docs_dir: PathBuf,

    /// Downstream endpoint receiving `{"chunks": [...]}`
    pub relay_url: String,

    /// Chunking parameters
    pub chunking: ChunkConfig,

    /// Whether batch runs report files that match no supported pattern
    pub report_unsupported: bool,

    /// HTTP listen port
    pub port: u16,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            relay_url: DEFAULT_RELAY_URL.to_string(),
            chunking: ChunkConfig::default(),
            report_unsupported: true,
            port: DEFAULT_PORT,
        }
    }
}

impl UploaderConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            docs_dir: std::env::var("DOCS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DOCS_DIR)),
            relay_url: std::env::var("RELAY_URL")
                .unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string()),
            chunking: ChunkConfig {
                max_characters: env_parse("MAX_CHARACTERS", DEFAULT_MAX_CHARACTERS),
                overlap: env_parse("CHUNK_OVERLAP", DEFAULT_CHUNK_OVERLAP),
                overlap_all: env_flag("OVERLAP_ALL", true),
            },
            report_unsupported: env_flag("REPORT_UNSUPPORTED", true),
            port: env_parse("PORT", DEFAULT_PORT),
        }
    }

    /// Point the service at a different shared directory.
    pub fn with_docs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.docs_dir = dir.into();
        self
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

/// Configuration for chunking a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Hard upper bound on chunk length, in characters
    pub max_characters: usize,

    /// Characters shared between consecutive chunks
    pub overlap: usize,

    /// Apply overlap between every pair of chunks, not only between
    /// fragments of a split oversized element
    pub overlap_all: bool,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_characters: DEFAULT_MAX_CHARACTERS,
            overlap: DEFAULT_CHUNK_OVERLAP,
            overlap_all: true,
        }
    }
}

impl ChunkConfig {
    /// Create a config with the given maximum chunk length.
    pub fn with_max_characters(max_characters: usize) -> Self {
        Self {
            max_characters,
            ..Default::default()
        }
    }

    /// Set the overlap.
    pub fn with_overlap(mut self, overlap: usize) -> Self {
        self.overlap = overlap;
        self
    }

    /// Enable or disable overlap between all chunks.
    pub fn with_overlap_all(mut self, overlap_all: bool) -> Self {
        self.overlap_all = overlap_all;
        self
    }

    /// Maximum length, never zero.
    pub fn effective_max(&self) -> usize {
        self.max_characters.max(1)
    }

    /// Overlap clamped below the maximum length.
    pub fn effective_overlap(&self) -> usize {
        let max = self.effective_max();
        if self.overlap >= max {
            max / 2
        } else {
            self.overlap
        }
    }
}
