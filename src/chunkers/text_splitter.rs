//! Splitter for text that does not fit in a single chunk.

/// Separators tried in order when looking for a split point.
const SEPARATORS: [char; 2] = ['\n', ' '];

/// Splits oversized text into fragments of at most `max_chars` characters.
///
/// The split point is the last newline inside the window, else the last
/// space, else a hard cut at the window end. Each fragment after the first
/// starts with the last `overlap` characters of the previous one; without
/// overlap the separator itself is dropped.
#[derive(Debug, Clone, Copy)]
pub struct TextSplitter {
    max_chars: usize,
    overlap: usize,
}

impl TextSplitter {
    /// Create a splitter. `overlap` must be smaller than `max_chars`.
    pub fn new(max_chars: usize, overlap: usize) -> Self {
        let max_chars = max_chars.max(1);
        Self {
            max_chars,
            overlap: overlap.min(max_chars - 1),
        }
    }

    /// Split `text` into fragments, dropping whitespace-only ones.
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut fragments = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            if chars.len() - start <= self.max_chars {
                push_fragment(&mut fragments, &chars[start..]);
                break;
            }

            let window_end = start + self.max_chars;
            let (end, separator_len) = match self.find_separator(&chars, start, window_end) {
                Some(idx) => (idx, 1),
                None => (window_end, 0),
            };

            push_fragment(&mut fragments, &chars[start..end]);
            // Repeat exactly the last `overlap` characters of the fragment.
            start = if self.overlap > 0 {
                end - self.overlap
            } else {
                end + separator_len
            };
        }

        fragments
    }

    /// Last separator position in the window that still guarantees progress.
    fn find_separator(&self, chars: &[char], start: usize, window_end: usize) -> Option<usize> {
        // A separator at `window_end` ends a fragment of exactly max_chars.
        let last = window_end.min(chars.len() - 1);
        SEPARATORS.iter().find_map(|sep| {
            (start + self.overlap + 1..=last)
                .rev()
                .find(|&idx| chars[idx] == *sep)
        })
    }
}

fn push_fragment(fragments: &mut Vec<String>, chars: &[char]) {
    let fragment: String = chars.iter().collect();
    let fragment = fragment.trim_end();
    if !fragment.trim_start().is_empty() {
        fragments.push(fragment.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_text_untouched() {
        let splitter = TextSplitter::new(20, 5);
        assert_eq!(splitter.split("short text"), vec!["short text"]);
    }

    #[test]
    fn test_prefers_newline_then_space() {
        let splitter = TextSplitter::new(12, 0);
        assert_eq!(
            splitter.split("one two\nthree four five"),
            vec!["one two", "three four", "five"]
        );
    }

    #[test]
    fn test_hard_cut_with_overlap() {
        let splitter = TextSplitter::new(10, 3);
        let fragments = splitter.split("abcdefghijklmnopqrstuvwxyz");

        assert_eq!(fragments, vec!["abcdefghij", "hijklmnopq", "opqrstuvwx", "vwxyz"]);
    }

    #[test]
    fn test_separator_split_repeats_exact_overlap() {
        let splitter = TextSplitter::new(10, 3);
        let fragments = splitter.split("aaaa bbbb cccc dddd");

        assert_eq!(fragments, vec!["aaaa bbbb", "bbb cccc", "ccc dddd"]);
        for pair in fragments.windows(2) {
            let tail: String = pair[0].chars().skip(pair[0].chars().count() - 3).collect();
            assert!(pair[1].starts_with(&tail), "{:?} / {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_fragments_bounded_and_overlapping() {
        let splitter = TextSplitter::new(50, 10);
        let text = "lorem ipsum dolor sit amet consectetur ".repeat(20);
        let fragments = splitter.split(&text);

        assert!(fragments.len() > 1);
        for fragment in &fragments {
            assert!(fragment.chars().count() <= 50);
        }
        for pair in fragments.windows(2) {
            let head: String = pair[1].chars().take(5).collect();
            assert!(pair[0].contains(&head), "{:?} / {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_overlap_clamped_below_max() {
        let splitter = TextSplitter::new(4, 9);
        let fragments = splitter.split("abcdefgh");
        assert!(fragments.iter().all(|f| f.chars().count() <= 4));
        assert_eq!(fragments.first().map(String::as_str), Some("abcd"));
    }
}
