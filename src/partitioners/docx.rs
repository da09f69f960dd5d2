//! Word (.docx) partitioner.

use std::path::Path;

use docx_rs::{
    DocumentChild, InsertChild, MoveToChild, Paragraph, ParagraphChild, Run, RunChild, Table,
    TableCellContent, TableChild, TableRowChild,
};

use super::base::{collapse_whitespace, Partitioner};
use crate::error::{IngestError, Result};
use crate::types::{Element, ElementKind};

/// Word partitioner backed by `docx-rs`.
///
/// Heading/Title paragraph styles become titles, numbered paragraphs list
/// items and tables are flattened to ` | `-joined rows.
pub struct DocxPartitioner;

impl DocxPartitioner {
    /// Create a new Word partitioner.
    pub fn new() -> Self {
        Self
    }

    /// Partition an in-memory .docx archive.
    pub fn partition_bytes(&self, data: &[u8]) -> std::result::Result<Vec<Element>, String> {
        let docx = docx_rs::read_docx(data).map_err(|e| e.to_string())?;
        let mut elements = Vec::new();

        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(paragraph) => {
                    let text = collapse_whitespace(&paragraph_text(paragraph));
                    if !text.is_empty() {
                        elements.push(Element::new(paragraph_kind(paragraph), text));
                    }
                }
                DocumentChild::Table(table) => {
                    let text = table_text(table);
                    if !text.trim().is_empty() {
                        elements.push(Element::new(ElementKind::Table, text));
                    }
                }
                _ => {}
            }
        }

        Ok(elements)
    }
}

impl Default for DocxPartitioner {
    fn default() -> Self {
        Self::new()
    }
}

impl Partitioner for DocxPartitioner {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn description(&self) -> &'static str {
        "Partitions Word paragraphs and tables into elements"
    }

    fn partition(&self, path: &Path) -> Result<Vec<Element>> {
        let bytes = std::fs::read(path)?;
        self.partition_bytes(&bytes)
            .map_err(|message| IngestError::parse(path.display().to_string(), message))
    }
}

fn paragraph_kind(paragraph: &Paragraph) -> ElementKind {
    let style = paragraph
        .property
        .style
        .as_ref()
        .map(|s| s.val.as_str())
        .unwrap_or("");

    if style.starts_with("Heading") || style == "Title" {
        ElementKind::Title
    } else if paragraph.property.numbering_property.is_some() {
        ElementKind::ListItem
    } else {
        ElementKind::NarrativeText
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    collect_children(&paragraph.children, &mut text);
    text
}

/// Text of runs, including runs nested in hyperlinks and tracked insertions.
fn collect_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => collect_run(run, out),
            ParagraphChild::Hyperlink(link) => collect_children(&link.children, out),
            ParagraphChild::Insert(insert) => {
                for child in &insert.children {
                    if let InsertChild::Run(run) = child {
                        collect_run(run, out);
                    }
                }
            }
            ParagraphChild::MoveTo(moved) => {
                for child in &moved.children {
                    if let MoveToChild::Run(run) = child {
                        collect_run(run, out);
                    }
                }
            }
            _ => {}
        }
    }
}

fn collect_run(run: &Run, out: &mut String) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push(' '),
            _ => {}
        }
    }
}

#[allow(irrefutable_let_patterns)]
fn table_text(table: &Table) -> String {
    let mut rows = Vec::new();
    for child in &table.rows {
        let TableChild::TableRow(row) = child else {
            continue;
        };

        let mut cells = Vec::new();
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell else {
                continue;
            };
            let parts: Vec<String> = cell
                .children
                .iter()
                .filter_map(|content| match content {
                    TableCellContent::Paragraph(p) => Some(collapse_whitespace(&paragraph_text(p))),
                    _ => None,
                })
                .filter(|part| !part.is_empty())
                .collect();
            cells.push(parts.join(" "));
        }
        rows.push(cells.join(" | "));
    }
    rows.join("\n")
}
