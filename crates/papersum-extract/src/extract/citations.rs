//! Citation markers: numeric brackets and author-year parentheticals.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::Extractor;

static CITATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // [1], [1, 2, 3]
        r"\[(\d+(?:,\s*\d+)*)\]",
        // (Smith et al., 2022)
        r"\(([A-Za-z]+(?:\s+et\s+al\.?)?,?\s+\d{4})\)",
        // (Smith, 2022)
        r"\(([A-Za-z]+,?\s+\d{4})\)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Unique citation tokens, sorted by byte order.
pub fn extract_citations(text: &str) -> Vec<String> {
    let mut citations = BTreeSet::new();
    for re in CITATION_PATTERNS.iter() {
        for caps in re.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                citations.insert(m.as_str().to_string());
            }
        }
    }
    citations.into_iter().collect()
}

pub struct CitationExtractor;

impl Extractor for CitationExtractor {
    type Output = Vec<String>;

    fn name(&self) -> &'static str {
        "citations"
    }

    fn extract(&self, text: &str) -> Vec<String> {
        extract_citations(text)
    }

    fn fallback(&self) -> Vec<String> {
        Vec::new()
    }
}
