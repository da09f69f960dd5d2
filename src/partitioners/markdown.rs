//! Markdown partitioner.

use std::path::Path;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use super::base::{collapse_whitespace, read_lossy, Partitioner};
use super::html::HtmlPartitioner;
use crate::error::Result;
use crate::types::{Element, ElementKind};

/// Markdown partitioner backed by `pulldown-cmark`.
///
/// Headings become titles, paragraphs narrative text, list entries list
/// items, code blocks code snippets and tables are flattened to rows of
/// ` | `-joined cells. Raw HTML blocks go through the HTML partitioner.
pub struct MarkdownPartitioner {
    options: Options,
    html: HtmlPartitioner,
}

impl MarkdownPartitioner {
    /// Create a new markdown partitioner.
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        Self {
            options,
            html: HtmlPartitioner::new(),
        }
    }

    /// Partition markdown source text.
    pub fn partition_str(&self, source: &str) -> Vec<Element> {
        let mut collector = Collector::default();

        for event in Parser::new_ext(source, self.options) {
            match event {
                Event::Start(Tag::Heading { .. }) => collector.flush(),
                Event::End(TagEnd::Heading(_)) => collector.emit(ElementKind::Title),

                Event::Start(Tag::Paragraph) => collector.flush(),
                Event::End(TagEnd::Paragraph) => {
                    let kind = collector.paragraph_kind();
                    collector.emit(kind);
                }

                Event::Start(Tag::List(_)) => {
                    collector.flush();
                    collector.list_depth += 1;
                }
                Event::End(TagEnd::List(_)) => {
                    collector.flush();
                    collector.list_depth = collector.list_depth.saturating_sub(1);
                }
                Event::Start(Tag::Item) => collector.flush(),
                Event::End(TagEnd::Item) => collector.emit(ElementKind::ListItem),

                Event::Start(Tag::CodeBlock(_)) => collector.flush(),
                Event::End(TagEnd::CodeBlock) => collector.emit(ElementKind::CodeSnippet),

                Event::Start(Tag::Table(_)) => collector.flush(),
                Event::End(TagEnd::TableCell) => {
                    let cell = collector.take_buffer();
                    collector.cells.push(cell);
                }
                Event::End(TagEnd::TableHead) | Event::End(TagEnd::TableRow) => {
                    let cells = std::mem::take(&mut collector.cells);
                    collector.rows.push(cells.join(" | "));
                }
                Event::End(TagEnd::Table) => {
                    let rows = std::mem::take(&mut collector.rows);
                    collector.push(ElementKind::Table, rows.join("\n"));
                }

                Event::Start(Tag::HtmlBlock) => collector.flush(),
                Event::Html(raw) => collector.raw_html.push_str(&raw),
                Event::End(TagEnd::HtmlBlock) => {
                    let raw = std::mem::take(&mut collector.raw_html);
                    collector.elements.extend(self.html.partition_fragment(&raw));
                }
                Event::InlineHtml(raw) => {
                    for element in self.html.partition_fragment(&raw) {
                        collector.buffer.push_str(&element.text);
                    }
                }

                Event::Text(text) | Event::Code(text) => collector.buffer.push_str(&text),
                Event::SoftBreak => collector.buffer.push(' '),
                Event::HardBreak => collector.buffer.push('\n'),
                _ => {}
            }
        }

        collector.flush();
        collector.elements
    }
}

impl Default for MarkdownPartitioner {
    fn default() -> Self {
        Self::new()
    }
}

impl Partitioner for MarkdownPartitioner {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn description(&self) -> &'static str {
        "Partitions markdown into titles, paragraphs, list items, code and tables"
    }

    fn partition(&self, path: &Path) -> Result<Vec<Element>> {
        let source = read_lossy(path)?;
        Ok(self.partition_str(&source))
    }
}

/// Accumulates inline text until a block ends.
#[derive(Default)]
struct Collector {
    elements: Vec<Element>,
    buffer: String,
    cells: Vec<String>,
    rows: Vec<String>,
    raw_html: String,
    list_depth: usize,
}

impl Collector {
    fn paragraph_kind(&self) -> ElementKind {
        if self.list_depth > 0 {
            ElementKind::ListItem
        } else {
            ElementKind::NarrativeText
        }
    }

    fn take_buffer(&mut self) -> String {
        collapse_whitespace(&std::mem::take(&mut self.buffer))
    }

    /// Emit pending text (tight list items carry text without a paragraph).
    fn flush(&mut self) {
        if !self.buffer.trim().is_empty() {
            let kind = self.paragraph_kind();
            self.emit(kind);
        } else {
            self.buffer.clear();
        }
    }

    fn emit(&mut self, kind: ElementKind) {
        let text = if kind == ElementKind::CodeSnippet {
            std::mem::take(&mut self.buffer).trim_end().to_string()
        } else {
            self.take_buffer()
        };
        self.push(kind, text);
    }

    fn push(&mut self, kind: ElementKind, text: String) {
        if !text.trim().is_empty() {
            self.elements.push(Element::new(kind, text));
        }
    }
}
