//! Heuristic entity extraction.
//!
//! Each category is an independent [`Extractor`]. [`extract_all`] runs every
//! one of them behind a panic boundary, so a fault in one category degrades to
//! that category's fallback and leaves the others intact.

pub mod citations;
pub mod contributions;
pub mod datasets;
pub mod equations;
pub mod glossary;
pub mod limitations;
pub mod results;

use std::panic::{self, AssertUnwindSafe};

use papersum_core::{GlossaryEntry, MetricResult};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub use citations::{extract_citations, CitationExtractor};
pub use contributions::{extract_contributions, ContributionExtractor};
pub use datasets::{extract_baselines, extract_datasets, BaselineExtractor, DatasetExtractor};
pub use equations::{extract_equations, EquationExtractor};
pub use glossary::{extract_glossary, GlossaryExtractor};
pub use limitations::{extract_limitations, LimitationExtractor};
pub use results::{extract_results, ResultExtractor};

/// A pure, text-in/list-out extraction strategy.
pub trait Extractor {
    type Output;

    /// Category name used in logs.
    fn name(&self) -> &'static str;

    fn extract(&self, text: &str) -> Self::Output;

    /// Value substituted when extraction fails.
    fn fallback(&self) -> Self::Output;
}

/// Run one extractor, replacing a panic with its fallback.
pub fn run_isolated<E: Extractor>(extractor: &E, text: &str) -> E::Output {
    match panic::catch_unwind(AssertUnwindSafe(|| extractor.extract(text))) {
        Ok(output) => output,
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::warn!("Extractor '{}' failed, using fallback: {}", extractor.name(), reason);
            extractor.fallback()
        }
    }
}

/// Combined output of every extractor for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub citations: Vec<String>,
    pub equations: Vec<String>,
    pub results: Vec<MetricResult>,
    pub contributions: Vec<String>,
    pub datasets: Vec<String>,
    pub baselines: Vec<String>,
    pub limitations: Vec<String>,
    pub glossary: Vec<GlossaryEntry>,
}

/// Run all extractors over the full text.
pub fn extract_all(text: &str) -> Extraction {
    let extraction = Extraction {
        citations: run_isolated(&CitationExtractor, text),
        equations: run_isolated(&EquationExtractor, text),
        results: run_isolated(&ResultExtractor, text),
        contributions: run_isolated(&ContributionExtractor, text),
        datasets: run_isolated(&DatasetExtractor, text),
        baselines: run_isolated(&BaselineExtractor, text),
        limitations: run_isolated(&LimitationExtractor, text),
        glossary: run_isolated(&GlossaryExtractor, text),
    };
    tracing::debug!(
        "Extracted {} citations, {} equations, {} results, {} glossary entries",
        extraction.citations.len(),
        extraction.equations.len(),
        extraction.results.len(),
        extraction.glossary.len()
    );
    extraction
}

/// Group 1 of every match, where the part of the pattern after group 1 is
/// trailing context: it must match but the next search resumes at the end of
/// group 1, so the context can begin the following match.
pub(crate) fn captures_until<'t>(re: &Regex, text: &'t str) -> Vec<&'t str> {
    let mut found = Vec::new();
    let mut at = 0;
    while at < text.len() {
        let Some(caps) = re.captures_at(text, at) else {
            break;
        };
        let Some(group) = caps.get(1) else {
            break;
        };
        found.push(group.as_str());
        // Every caller's pattern consumes a keyword before group 1.
        at = group.end().max(at + 1);
        while !text.is_char_boundary(at) {
            at += 1;
        }
    }
    found
}

/// Trim, drop empty, keep order.
pub(crate) fn trimmed_nonempty<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    items
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use papersum_core::NOT_SPECIFIED;

    struct Exploding;

    impl Extractor for Exploding {
        type Output = Vec<String>;

        fn name(&self) -> &'static str {
            "exploding"
        }

        fn extract(&self, _text: &str) -> Vec<String> {
            panic!("boom");
        }

        fn fallback(&self) -> Vec<String> {
            vec![NOT_SPECIFIED.to_string()]
        }
    }

    #[test]
    fn test_panic_becomes_fallback() {
        assert_eq!(run_isolated(&Exploding, "text"), vec![NOT_SPECIFIED.to_string()]);
    }

    #[test]
    fn test_captures_until_resumes_at_group_end() {
        let re = Regex::new(r"(?s)item:(.*?)(?:\nitem:|$)").unwrap();
        let text = "item: a\nitem: b\nitem: c";
        assert_eq!(captures_until(&re, text), vec![" a", " b", " c"]);
    }

    #[test]
    fn test_extract_all_on_empty_text() {
        let extraction = extract_all("");
        assert!(extraction.citations.is_empty());
        assert!(extraction.equations.is_empty());
        assert!(extraction.results.is_empty());
        assert_eq!(extraction.contributions, vec![NOT_SPECIFIED]);
        assert_eq!(extraction.datasets, vec![NOT_SPECIFIED]);
        assert_eq!(extraction.baselines, vec![NOT_SPECIFIED]);
        assert_eq!(extraction.limitations, vec![NOT_SPECIFIED]);
        assert_eq!(extraction.glossary, vec![GlossaryEntry::sentinel()]);
    }
}
