//! Limitation statements.

use once_cell::sync::Lazy;
use papersum_core::NOT_SPECIFIED;
use regex::Regex;

use super::{captures_until, trimmed_nonempty, Extractor};

const MAX_LIMITATIONS: usize = 3;

static LIMITATION_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)limitations?:?\s*\n(.*?)(?:\n\s*\d+\.|\n\s*[a-z])").unwrap()
});

/// Clause up to the next period after a hedging keyword.
static LIMITATION_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)(?:however|but|limitation|drawback|weakness).*?([^.]+\.)").unwrap()
});

/// Heading blocks first, then hedged clauses. Not deduplicated.
pub fn extract_limitations(text: &str) -> Vec<String> {
    let mut limitations = trimmed_nonempty(captures_until(&LIMITATION_HEADING, text));
    limitations.extend(trimmed_nonempty(
        LIMITATION_CLAUSE
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str())),
    ));

    if limitations.is_empty() {
        return vec![NOT_SPECIFIED.to_string()];
    }
    limitations.truncate(MAX_LIMITATIONS);
    limitations
}

pub struct LimitationExtractor;

impl Extractor for LimitationExtractor {
    type Output = Vec<String>;

    fn name(&self) -> &'static str {
        "limitations"
    }

    fn extract(&self, text: &str) -> Vec<String> {
        extract_limitations(text)
    }

    fn fallback(&self) -> Vec<String> {
        vec![NOT_SPECIFIED.to_string()]
    }
}
