//! HTML page to plain text.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Node, Selector};

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Visible text of a page and its `<title>`, if any. Script and style
/// contents are dropped.
pub fn html_to_text(html: &str) -> (String, Option<String>) {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    let mut raw = String::with_capacity(html.len() / 2);
    for node in document.tree.root().descendants() {
        if let Node::Text(text) = node.value() {
            let hidden = node.ancestors().any(|a| {
                matches!(a.value(), Node::Element(el) if el.name() == "script" || el.name() == "style")
            });
            if !hidden {
                raw.push_str(text);
            }
        }
    }

    (clean_text(&raw), title)
}

/// Collapse whitespace runs to one space and keep only printable ASCII.
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    collapsed
        .chars()
        .filter(|c| *c == '\n' || (' '..='~').contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}
