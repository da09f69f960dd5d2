//! PDF partitioner.

use std::path::Path;

use tracing::debug;

use super::base::{collapse_whitespace, split_paragraphs, Partitioner};
use crate::error::{IngestError, Result};
use crate::types::Element;

/// PDF partitioner backed by `pdf-extract`.
///
/// The extracted text is split on page breaks and blank lines; each block
/// becomes a narrative text element.
pub struct PdfPartitioner;

impl PdfPartitioner {
    /// Create a new PDF partitioner.
    pub fn new() -> Self {
        Self
    }

    /// Turn extracted PDF text into elements.
    pub fn partition_extracted(&self, text: &str) -> Vec<Element> {
        split_paragraphs(&text.replace('\0', ""))
            .into_iter()
            .map(|block| collapse_whitespace(&block))
            .filter(|block| !block.is_empty())
            .map(Element::narrative)
            .collect()
    }
}

impl Default for PdfPartitioner {
    fn default() -> Self {
        Self::new()
    }
}

impl Partitioner for PdfPartitioner {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn description(&self) -> &'static str {
        "Extracts PDF text and splits it into paragraph elements"
    }

    fn partition(&self, path: &Path) -> Result<Vec<Element>> {
        let bytes = std::fs::read(path)?;
        let text = pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| IngestError::parse(path.display().to_string(), e.to_string()))?;

        debug!(path = %path.display(), chars = text.len(), "Extracted PDF text");
        Ok(self.partition_extracted(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extracted_text_split_into_blocks() {
        let partitioner = PdfPartitioner::new();
        let elements = partitioner.partition_extracted(
            "Chapter 1\n\nThe dough\nmust rest.\x0cPage two\0 text\n\n\n",
        );

        let texts: Vec<_> = elements.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Chapter 1", "The dough must rest.", "Page two text"]);
    }

    #[test]
    fn test_malformed_pdf_is_parse_error() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"this is not a pdf").unwrap();

        let partitioner = PdfPartitioner::new();
        let err = partitioner.partition(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::Parse { .. }));
    }
}
