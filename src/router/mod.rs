//! Format dispatcher.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::partitioners::{
    DocumentFormat, DocxPartitioner, HtmlPartitioner, MarkdownPartitioner, Partitioner,
    PdfPartitioner, TextPartitioner,
};
use crate::types::Element;

/// Router that selects the partitioner for a document by file extension.
///
/// Exactly one partitioner serves each supported format; any other extension
/// is rejected with `UnsupportedType`.
pub struct PartitionRouter {
    /// Markdown partitioner (.md)
    markdown: Arc<MarkdownPartitioner>,
    /// Plain-text partitioner (.txt)
    text: Arc<TextPartitioner>,
    /// HTML partitioner (.html, .htm)
    html: Arc<HtmlPartitioner>,
    /// PDF partitioner (.pdf)
    pdf: Arc<PdfPartitioner>,
    /// Word partitioner (.docx)
    docx: Arc<DocxPartitioner>,
}

impl PartitionRouter {
    /// Create a router with the default partitioners.
    pub fn new() -> Self {
        Self {
            markdown: Arc::new(MarkdownPartitioner::new()),
            text: Arc::new(TextPartitioner::new()),
            html: Arc::new(HtmlPartitioner::new()),
            pdf: Arc::new(PdfPartitioner::new()),
            docx: Arc::new(DocxPartitioner::new()),
        }
    }

    /// Get the partitioner for a format.
    pub fn partitioner_for(&self, format: DocumentFormat) -> Arc<dyn Partitioner> {
        match format {
            DocumentFormat::Markdown => Arc::clone(&self.markdown) as Arc<dyn Partitioner>,
            DocumentFormat::Text => Arc::clone(&self.text) as Arc<dyn Partitioner>,
            DocumentFormat::Html => Arc::clone(&self.html) as Arc<dyn Partitioner>,
            DocumentFormat::Pdf => Arc::clone(&self.pdf) as Arc<dyn Partitioner>,
            DocumentFormat::Docx => Arc::clone(&self.docx) as Arc<dyn Partitioner>,
        }
    }

    /// Get the partitioner for a path, by its extension.
    pub fn get_partitioner(&self, path: &Path) -> Result<Arc<dyn Partitioner>> {
        let format = DocumentFormat::from_path(path)?;
        Ok(self.partitioner_for(format))
    }

    /// Dispatch and partition the document at `path`.
    pub fn partition(&self, path: &Path) -> Result<Vec<Element>> {
        let partitioner = self.get_partitioner(path)?;
        let elements = partitioner.partition(path)?;

        debug!(
            path = %path.display(),
            partitioner = partitioner.name(),
            elements = elements.len(),
            "Partitioned document"
        );

        Ok(elements)
    }

    /// List all available partitioners.
    pub fn list_partitioners(&self) -> Vec<(&'static str, &'static str)> {
        DocumentFormat::ALL
            .iter()
            .map(|format| {
                let partitioner = self.partitioner_for(*format);
                (partitioner.name(), partitioner.description())
            })
            .collect()
    }
}

impl Default for PartitionRouter {
    fn default() -> Self {
        Self::new()
    }
}
