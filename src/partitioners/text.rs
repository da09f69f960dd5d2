//! Plain-text partitioner.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use super::base::{collapse_whitespace, read_lossy, split_paragraphs, Partitioner};
use crate::error::Result;
use crate::types::Element;

/// Longest single line still considered a title.
const MAX_TITLE_CHARS: usize = 80;

lazy_static! {
    static ref BULLET: Regex = Regex::new(r"^\s*(?:[-*+•·]|\d{1,3}[.)])\s+(.*)$").unwrap();
}

/// Plain-text partitioner.
///
/// Paragraphs are separated by blank lines. Bullet lines become list items,
/// short unpunctuated single lines become titles, the rest narrative text.
pub struct TextPartitioner;

impl TextPartitioner {
    /// Create a new text partitioner.
    pub fn new() -> Self {
        Self
    }

    /// Partition plain text.
    pub fn partition_str(&self, text: &str) -> Vec<Element> {
        let mut elements = Vec::new();

        for paragraph in split_paragraphs(text) {
            let lines: Vec<&str> = paragraph.lines().collect();

            if lines.iter().all(|line| BULLET.is_match(line)) {
                for line in lines {
                    if let Some(caps) = BULLET.captures(line) {
                        let item = collapse_whitespace(&caps[1]);
                        if !item.is_empty() {
                            elements.push(Element::list_item(item));
                        }
                    }
                }
                continue;
            }

            let joined = collapse_whitespace(&paragraph);
            if lines.len() == 1 && looks_like_title(&joined) {
                elements.push(Element::title(joined));
            } else {
                elements.push(Element::narrative(joined));
            }
        }

        elements
    }
}

impl Default for TextPartitioner {
    fn default() -> Self {
        Self::new()
    }
}

impl Partitioner for TextPartitioner {
    fn name(&self) -> &'static str {
        "text"
    }

    fn description(&self) -> &'static str {
        "Partitions plain text into paragraphs, titles and list items"
    }

    fn partition(&self, path: &Path) -> Result<Vec<Element>> {
        let text = read_lossy(path)?;
        Ok(self.partition_str(&text))
    }
}

fn looks_like_title(line: &str) -> bool {
    let ends_with_punctuation = line
        .chars()
        .last()
        .map_or(false, |c| matches!(c, '.' | '!' | '?' | ',' | ';' | ':'));

    line.chars().count() <= MAX_TITLE_CHARS
        && !ends_with_punctuation
        && line.chars().any(char::is_alphabetic)
}
