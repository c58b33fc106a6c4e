//! Term definitions of the form `Term is a ...` and `Term: ...`.

use once_cell::sync::Lazy;
use papersum_core::GlossaryEntry;
use regex::Regex;

use super::Extractor;

const MAX_TERMS: usize = 10;

static DEFINITION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+is\s+(?:a|an)\s+([^.]+\.)",
        r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s*[:=]\s*([^.]+\.)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

pub fn extract_glossary(text: &str) -> Vec<GlossaryEntry> {
    let glossary: Vec<GlossaryEntry> = DEFINITION_PATTERNS
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|caps| match (caps.get(1), caps.get(2)) {
            (Some(term), Some(definition)) => Some(GlossaryEntry {
                term: term.as_str().trim().to_string(),
                definition: definition.as_str().trim().to_string(),
            }),
            _ => None,
        })
        .take(MAX_TERMS)
        .collect();

    if glossary.is_empty() {
        return vec![GlossaryEntry::sentinel()];
    }
    glossary
}

pub struct GlossaryExtractor;

impl Extractor for GlossaryExtractor {
    type Output = Vec<GlossaryEntry>;

    fn name(&self) -> &'static str {
        "glossary"
    }

    fn extract(&self, text: &str) -> Vec<GlossaryEntry> {
        extract_glossary(text)
    }

    fn fallback(&self) -> Vec<GlossaryEntry> {
        vec![GlossaryEntry::sentinel()]
    }
}
