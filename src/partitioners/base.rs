//! Base trait and shared helpers for all partitioners.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{IngestError, Result};
use crate::types::Element;

/// The core trait that all partitioners must implement.
///
/// A partitioner reads a document from disk and turns it into an ordered
/// sequence of structural elements. Element internals are not validated
/// beyond their string form.
pub trait Partitioner: Send + Sync {
    /// Get the name of this partitioner.
    fn name(&self) -> &'static str;

    /// Partition the document at `path`.
    fn partition(&self, path: &Path) -> Result<Vec<Element>>;

    /// Get the description of this partitioner.
    fn description(&self) -> &'static str {
        "A document partitioner"
    }
}

/// Document formats accepted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Markdown,
    Text,
    Html,
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// All formats, in batch discovery order.
    pub const ALL: [DocumentFormat; 5] = [
        DocumentFormat::Markdown,
        DocumentFormat::Text,
        DocumentFormat::Html,
        DocumentFormat::Pdf,
        DocumentFormat::Docx,
    ];

    /// Resolve the format of a path from its extension, case-insensitively.
    ///
    /// Fails with `UnsupportedType` carrying the lower-cased extension with
    /// its leading dot, or an empty string when there is none.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = extension_of(path);
        Self::from_extension(&extension)
            .ok_or(IngestError::UnsupportedType(extension))
    }

    /// Match a dotted, lower-cased extension such as `".md"`.
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.extensions().iter().any(|ext| *ext == extension))
    }

    /// File name suffixes picked up by batch runs, in processing order.
    pub fn batch_patterns() -> Vec<&'static str> {
        Self::ALL
            .iter()
            .flat_map(|format| format.extensions().iter().copied())
            .collect()
    }

    /// Extensions handled by this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            DocumentFormat::Markdown => &[".md"],
            DocumentFormat::Text => &[".txt"],
            DocumentFormat::Html => &[".html", ".htm"],
            DocumentFormat::Pdf => &[".pdf"],
            DocumentFormat::Docx => &[".docx"],
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Markdown => write!(f, "markdown"),
            DocumentFormat::Text => write!(f, "text"),
            DocumentFormat::Html => write!(f, "html"),
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::Docx => write!(f, "docx"),
        }
    }
}

/// Lower-cased extension of `path` including the leading dot.
///
/// Dotfiles such as `.env` have no extension.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

/// Read a document as text, replacing invalid UTF-8.
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

lazy_static! {
    static ref BLANK_LINE: Regex = Regex::new(r"\n[ \t]*\n").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Split text into paragraphs at blank lines and form feeds.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\x0c', "\n\n");
    BLANK_LINE
        .split(&normalized)
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Collapse runs of whitespace into single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}
