//! Visible text extraction
//!
//! Pages are parsed once with `scraper` and reduced to the text a reader would
//! see: text nodes outside of non-rendered elements, concatenated as they
//! appear. Block-level elements break the text, so `<p>a</p><p>b</p>` reads as
//! two words while `Uni<b>berg</b>` stays one. Runs of whitespace collapse to a
//! single space.

use scraper::{ElementRef, Html, Node};

/// Elements whose text content is never rendered
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Elements that start and end a line of rendered text
const BLOCK_ELEMENTS: [&str; 42] = [
    "address", "article", "aside", "blockquote", "body", "br", "caption", "dd", "details",
    "dialog", "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1",
    "h2", "h3", "h4", "h5", "h6", "head", "header", "hr", "html", "li", "main", "nav", "ol",
    "option", "p", "pre", "section", "table", "td", "th", "title", "tr", "ul",
];

/// The visible text of one parsed page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageText {
    text: String,
}

impl PageText {
    /// Parses raw HTML and keeps only its visible text
    ///
    /// Malformed markup is recovered by the HTML5 parser; this never fails.
    pub fn parse(html: &str) -> Self {
        Self {
            text: extract_visible_text(html),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Extracts the visible text from an HTML document
///
/// # Example
///
/// ```
/// use page_tally::analysis::extract_visible_text;
///
/// let html = "<p>Welcome to Uni<b>berg</b></p><p>team</p><script>var hidden = 1;</script>";
/// assert_eq!(extract_visible_text(html), "Welcome to Uniberg team");
/// ```
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::new();
    collect_text(document.root_element(), &mut raw);

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Appends the rendered text under `element` to `out`
fn collect_text(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    if HIDDEN_ELEMENTS.contains(&name) {
        return;
    }

    let block = BLOCK_ELEMENTS.contains(&name);
    if block {
        out.push(' ');
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            _ => {}
        }
    }

    if block {
        out.push(' ');
    }
}
