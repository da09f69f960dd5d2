//! HTML partitioner.

use std::path::Path;

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

use super::base::{collapse_whitespace, read_lossy, Partitioner};
use crate::error::Result;
use crate::types::{Element, ElementKind};

/// Tags that start a block-level element.
const BLOCK_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "li", "pre", "blockquote", "table", "dt", "dd",
];

/// Containers whose loose text forms an element of its own.
const SECTION_TAGS: &[&str] = &[
    "body", "div", "section", "article", "main", "header", "footer", "nav", "aside", "figure",
    "figcaption", "form", "fieldset", "address", "details", "summary", "ul", "ol", "dl", "tr",
    "td", "th", "hr",
];

lazy_static! {
    static ref BODY: Selector = Selector::parse("body").unwrap();
    static ref ROWS: Selector = Selector::parse("tr").unwrap();
    static ref CELLS: Selector = Selector::parse("th, td").unwrap();
}

/// HTML partitioner backed by `scraper`.
///
/// The body is walked in document order. Block elements are taken whole;
/// text outside any block becomes a `Text` element per enclosing container.
pub struct HtmlPartitioner;

impl HtmlPartitioner {
    /// Create a new HTML partitioner.
    pub fn new() -> Self {
        Self
    }

    /// Partition an HTML document.
    pub fn partition_str(&self, html: &str) -> Vec<Element> {
        let document = Html::parse_document(html);
        let root = document
            .select(&BODY)
            .next()
            .unwrap_or_else(|| document.root_element());
        walk(&root)
    }

    /// Partition an HTML fragment, such as raw HTML embedded in markdown.
    pub fn partition_fragment(&self, html: &str) -> Vec<Element> {
        let fragment = Html::parse_fragment(html);
        walk(&fragment.root_element())
    }
}

impl Default for HtmlPartitioner {
    fn default() -> Self {
        Self::new()
    }
}

impl Partitioner for HtmlPartitioner {
    fn name(&self) -> &'static str {
        "html"
    }

    fn description(&self) -> &'static str {
        "Partitions HTML block elements into titles, paragraphs, list items and tables"
    }

    fn partition(&self, path: &Path) -> Result<Vec<Element>> {
        let html = read_lossy(path)?;
        Ok(self.partition_str(&html))
    }
}

fn walk(root: &ElementRef<'_>) -> Vec<Element> {
    let mut walker = Walker::default();
    walker.visit(root);
    walker.flush();
    walker.elements
}

#[derive(Default)]
struct Walker {
    elements: Vec<Element>,
    pending: String,
}

impl Walker {
    fn visit(&mut self, element: &ElementRef<'_>) {
        for child in element.children() {
            if let Some(text) = child.value().as_text() {
                self.pending.push_str(text);
                self.pending.push(' ');
                continue;
            }

            let Some(child_element) = ElementRef::wrap(child) else {
                continue;
            };
            if is_hidden(&child_element) {
                continue;
            }

            let name = child_element.value().name();
            if BLOCK_TAGS.contains(&name) {
                self.flush();
                self.push(block_element(&child_element));
            } else if SECTION_TAGS.contains(&name) {
                self.flush();
                self.visit(&child_element);
                self.flush();
            } else {
                self.visit(&child_element);
            }
        }
    }

    /// Emit loose text gathered since the last element.
    fn flush(&mut self) {
        let text = collapse_whitespace(&std::mem::take(&mut self.pending));
        self.push(Element::new(ElementKind::Text, text));
    }

    fn push(&mut self, element: Element) {
        if !element.is_blank() {
            self.elements.push(element);
        }
    }
}

fn block_element(block: &ElementRef<'_>) -> Element {
    let name = block.value().name();
    match name {
        "table" => Element::new(ElementKind::Table, table_text(block)),
        "pre" => Element::new(
            ElementKind::CodeSnippet,
            block.text().collect::<String>().trim_end().to_string(),
        ),
        _ => Element::new(kind_for_tag(name), visible_text(block)),
    }
}

fn kind_for_tag(name: &str) -> ElementKind {
    match name {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => ElementKind::Title,
        "li" | "dt" | "dd" => ElementKind::ListItem,
        _ => ElementKind::NarrativeText,
    }
}

fn is_hidden(element: &ElementRef<'_>) -> bool {
    matches!(element.value().name(), "script" | "style" | "noscript" | "template")
}

/// Text of an element with script/style content skipped.
fn visible_text(element: &ElementRef<'_>) -> String {
    let mut text = String::new();
    collect_text(element, &mut text);
    collapse_whitespace(&text)
}

fn collect_text(element: &ElementRef<'_>, out: &mut String) {
    if is_hidden(element) {
        return;
    }
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        } else if let Some(child_element) = ElementRef::wrap(child) {
            collect_text(&child_element, out);
        }
    }
}

fn table_text(table: &ElementRef<'_>) -> String {
    table
        .select(&ROWS)
        .map(|row| {
            row.select(&CELLS)
                .map(|cell| visible_text(&cell))
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .filter(|row| !row.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blocks_in_order() {
        let partitioner = HtmlPartitioner::new();
        let elements = partitioner.partition_str(
            r#"<html><head><title>x</title><style>p { color: red; }</style></head>
            <body>
              <h1>Lasagne</h1>
              <p>Layer the   pasta<br>and sauce.</p>
              <ul><li>cheese</li><li><p>basil</p></li></ul>
              <script>var a = 1;</script>
            </body></html>"#,
        );

        assert_eq!(
            elements,
            vec![
                Element::title("Lasagne"),
                Element::narrative("Layer the pasta and sauce."),
                Element::list_item("cheese"),
                Element::list_item("basil"),
            ]
        );
    }

    #[test]
    fn test_table_rows() {
        let partitioner = HtmlPartitioner::new();
        let elements = partitioner.partition_str(
            "<table><tr><th>Item</th><th>Qty</th></tr><tr><td>Flour</td><td>200g</td></tr></table>",
        );

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].kind, ElementKind::Table);
        assert_eq!(elements[0].text, "Item | Qty\nFlour | 200g");
    }

    #[test]
    fn test_div_text_without_blocks() {
        let partitioner = HtmlPartitioner::new();
        let elements = partitioner.partition_str("<body><div>Just <b>some</b> text</div></body>");

        assert_eq!(elements, vec![Element::new(ElementKind::Text, "Just some text")]);
    }

    #[test]
    fn test_loose_text_between_blocks() {
        let partitioner = HtmlPartitioner::new();
        let elements = partitioner.partition_str(
            "<body><h1>Bread</h1><div>Mix flour and water, knead ten minutes.</div>\
             <section>Bake at <em>220C</em><p>Cool on a rack.</p>until golden</section></body>",
        );

        assert_eq!(
            elements,
            vec![
                Element::title("Bread"),
                Element::new(ElementKind::Text, "Mix flour and water, knead ten minutes."),
                Element::new(ElementKind::Text, "Bake at 220C"),
                Element::narrative("Cool on a rack."),
                Element::new(ElementKind::Text, "until golden"),
            ]
        );
    }

    #[test]
    fn test_fragment() {
        let partitioner = HtmlPartitioner::new();
        let elements = partitioner
            .partition_fragment("<div align=\"center\">\n<b>Serves</b> four\n</div>\n<!-- note -->");

        assert_eq!(elements, vec![Element::new(ElementKind::Text, "Serves four")]);
    }

    #[test]
    fn test_empty_body() {
        let partitioner = HtmlPartitioner::new();
        assert!(partitioner.partition_str("<html><body>  </body></html>").is_empty());
    }
}
