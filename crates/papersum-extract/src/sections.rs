//! Heuristic section segmentation.
//!
//! Each section is found with one case-insensitive pattern: heading keyword,
//! whitespace ending in a newline, then the shortest content that is followed
//! by a newline and the next expected heading. The trailing heading is part of
//! the match but not of the captured content, so only the first match per
//! section is used.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Named document regions. Ordering follows the fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Abstract,
    Introduction,
    Method,
    Results,
    Conclusion,
    Limitations,
    /// Whole document, used only when no heading was recognized.
    FullText,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::Introduction => "introduction",
            Self::Method => "method",
            Self::Results => "results",
            Self::Conclusion => "conclusion",
            Self::Limitations => "limitations",
            Self::FullText => "full_text",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered section name → text mapping. Never empty once built by [`segment`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionMap(BTreeMap<Section, String>);

impl SectionMap {
    pub fn get(&self, section: Section) -> Option<&str> {
        self.0.get(&section).map(String::as_str)
    }

    pub fn contains(&self, section: Section) -> bool {
        self.0.contains_key(&section)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn insert(&mut self, section: Section, text: String) {
        self.0.entry(section).or_insert(text);
    }
}

static SECTION_PATTERNS: Lazy<Vec<(Section, Regex)>> = Lazy::new(|| {
    let specs: [(Section, &str); 6] = [
        (
            Section::Abstract,
            r"(?is)abstract\s*\n(.*?)\n\s*(?:introduction|1\.|keywords|index terms)",
        ),
        (
            Section::Introduction,
            r"(?is)(?:1\.\s*)?introduction\s*\n(.*?)\n\s*(?:2\.|related work|background|method)",
        ),
        (
            Section::Method,
            r"(?is)(?:method|approach|algorithm|architecture)\s*\n(.*?)\n\s*(?:\d+\.|experiment|evaluation|result)",
        ),
        (
            Section::Results,
            r"(?is)(?:result|experiment|evaluation)\s*\n(.*?)\n\s*(?:\d+\.|discussion|conclusion|limitation)",
        ),
        (
            Section::Conclusion,
            r"(?is)conclusion\s*\n(.*?)\n\s*(?:reference|acknowledgment|appendix)",
        ),
        (
            Section::Limitations,
            r"(?is)limitation\s*\n(.*?)\n\s*(?:reference|acknowledgment|appendix)",
        ),
    ];
    specs
        .into_iter()
        .map(|(section, pattern)| (section, Regex::new(pattern).unwrap()))
        .collect()
});

/// Split raw text into named sections.
pub fn segment(text: &str) -> SectionMap {
    let mut sections = SectionMap::default();

    for (section, re) in SECTION_PATTERNS.iter() {
        if let Some(content) = re.captures(text).and_then(|caps| caps.get(1)) {
            sections.insert(*section, content.as_str().trim().to_string());
        }
    }

    if sections.is_empty() {
        sections.insert(Section::FullText, text.to_string());
    }

    tracing::debug!(
        "Segmented into {:?}",
        sections.iter().map(|(s, _)| s.as_str()).collect::<Vec<_>>()
    );
    sections
}
