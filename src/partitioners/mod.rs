//! Partitioning strategies for the supported document formats.

mod base;
mod docx;
mod html;
mod markdown;
mod pdf;
mod text;

pub use base::{
    collapse_whitespace, extension_of, split_paragraphs, DocumentFormat, Partitioner,
};
pub use docx::DocxPartitioner;
pub use html::HtmlPartitioner;
pub use markdown::MarkdownPartitioner;
pub use pdf::PdfPartitioner;
pub use text::TextPartitioner;
