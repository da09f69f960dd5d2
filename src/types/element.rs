//! Structural elements produced by the partitioners.

use serde::{Deserialize, Serialize};

/// The structural role of a partitioned element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Heading or document title
    Title,
    /// Body paragraph
    NarrativeText,
    /// Bulleted or numbered list entry
    ListItem,
    /// Table flattened to text rows
    Table,
    /// Fenced or preformatted code
    CodeSnippet,
    /// Text with no recognised structure
    Text,
}

impl ElementKind {
    /// Check if this element starts a new section.
    pub fn is_heading(&self) -> bool {
        matches!(self, ElementKind::Title)
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Title => write!(f, "title"),
            ElementKind::NarrativeText => write!(f, "narrative_text"),
            ElementKind::ListItem => write!(f, "list_item"),
            ElementKind::Table => write!(f, "table"),
            ElementKind::CodeSnippet => write!(f, "code_snippet"),
            ElementKind::Text => write!(f, "text"),
        }
    }
}

/// An ordered structural unit of a document (paragraph, heading, etc.).
///
/// Downstream stages only use the element's string form; the kind is kept
/// for logging and for partitioner tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Structural role
    pub kind: ElementKind,

    /// Text content
    pub text: String,
}

impl Element {
    /// Create a new element.
    pub fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Title, text)
    }

    pub fn narrative(text: impl Into<String>) -> Self {
        Self::new(ElementKind::NarrativeText, text)
    }

    pub fn list_item(text: impl Into<String>) -> Self {
        Self::new(ElementKind::ListItem, text)
    }

    /// Check if the element carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
