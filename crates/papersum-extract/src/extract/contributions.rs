//! Contribution statements and bulleted contribution lists.

use once_cell::sync::Lazy;
use papersum_core::NOT_SPECIFIED;
use regex::Regex;

use super::{captures_until, trimmed_nonempty, Extractor};

const MAX_CONTRIBUTIONS: usize = 5;

/// Content ends at a line that starts with `<digits>.` or with a letter.
static CONTRIBUTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?is)contributions?:?\s*\n(.*?)(?:\n\s*\d+\.|\n\s*[a-z])",
        r"(?is)our contributions?.*?:?\s*(.*?)(?:\n\s*\d+\.|\n\s*[a-z])",
        r"(?i)we (?:propose|present|introduce|contribute)\s+(.*?)(?:\.|\n)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Bullet glyphs and `1.` / `1)` markers at the start of a word, possibly
/// glued to the item text that follows.
static ITEM_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)(?:[•*\-]|\d+[.)])\s*").unwrap());

pub fn extract_contributions(text: &str) -> Vec<String> {
    let mut contributions = Vec::new();
    for re in CONTRIBUTION_PATTERNS.iter() {
        for block in captures_until(re, text) {
            contributions.extend(trimmed_nonempty(ITEM_DELIMITER.split(block)));
        }
    }

    if contributions.is_empty() {
        return vec![NOT_SPECIFIED.to_string()];
    }
    contributions.truncate(MAX_CONTRIBUTIONS);
    contributions
}

pub struct ContributionExtractor;

impl Extractor for ContributionExtractor {
    type Output = Vec<String>;

    fn name(&self) -> &'static str {
        "contributions"
    }

    fn extract(&self, text: &str) -> Vec<String> {
        extract_contributions(text)
    }

    fn fallback(&self) -> Vec<String> {
        vec![NOT_SPECIFIED.to_string()]
    }
}
