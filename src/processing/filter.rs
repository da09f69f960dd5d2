//! Text filtering for chunks and name filtering for shared-folder files.

use std::path::{Component, Path};

use crate::types::TextChunk;

/// Convert chunks to their string form, trimmed, dropping empty ones.
///
/// Order is preserved.
pub fn filter_texts<T: ToString>(chunks: &[T]) -> Vec<String> {
    chunks
        .iter()
        .map(|chunk| chunk.to_string().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

/// Filter for [`TextChunk`]s produced by a chunker.
pub fn chunk_texts(chunks: &[TextChunk]) -> Vec<String> {
    filter_texts(chunks)
}

/// Check if a file name is hidden (starts with a dot).
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Check that a requested file name is a single plain path component.
///
/// Absolute paths, parent references and nested paths are rejected so a
/// request can never escape the shared directory.
pub fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_drops_blank_and_keeps_order() {
        let chunks = vec![
            TextChunk::new("  first ".to_string(), 0, 1),
            TextChunk::new(" \n\t ".to_string(), 1, 1),
            TextChunk::new(String::new(), 2, 0),
            TextChunk::new("second".to_string(), 3, 1),
        ];

        assert_eq!(chunk_texts(&chunks), vec!["first", "second"]);
    }

    #[test]
    fn test_filter_accepts_any_display() {
        assert_eq!(filter_texts(&["a", " ", "b "]), vec!["a", "b"]);
    }

    #[test]
    fn test_plain_file_names() {
        assert!(is_plain_file_name("pancakes.md"));
        assert!(is_plain_file_name("my notes.txt"));
        assert!(!is_plain_file_name("../etc/passwd"));
        assert!(!is_plain_file_name("/etc/passwd"));
        assert!(!is_plain_file_name("sub/dir.md"));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name(""));
    }

    #[test]
    fn test_hidden() {
        assert!(is_hidden(".draft.md"));
        assert!(!is_hidden("draft.md"));
    }
}
