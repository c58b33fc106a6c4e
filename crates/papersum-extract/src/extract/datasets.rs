//! Dataset and baseline names.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use papersum_core::NOT_SPECIFIED;
use regex::Regex;

use super::Extractor;

static DATASET_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(imagenet|cifar|mnist|coco|squad|glue|superglue|wmt|opus)",
        r"(?i)datasets?\s*[:=]\s*([A-Za-z0-9\-_]+)",
        r"(?i)we (?:use|evaluate on|test on)\s+([A-Za-z0-9\-_]+)\s+dataset",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static BASELINE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)baselines?\s*[:=]\s*([A-Za-z0-9\-_\s]+)",
        r"(?i)we compare (?:with|against|to)\s+([A-Za-z0-9\-_\s]+)",
        r"(?i)compared to\s+([A-Za-z0-9\-_\s]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Trimmed, non-empty group-1 captures of every pattern as a sorted set.
fn collect_sorted(patterns: &[Regex], text: &str) -> Vec<String> {
    let names: BTreeSet<String> = patterns
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        return vec![NOT_SPECIFIED.to_string()];
    }
    names.into_iter().collect()
}

/// Dataset names as written in the text, sorted.
pub fn extract_datasets(text: &str) -> Vec<String> {
    collect_sorted(&DATASET_PATTERNS, text)
}

/// Baseline phrases, sorted.
pub fn extract_baselines(text: &str) -> Vec<String> {
    collect_sorted(&BASELINE_PATTERNS, text)
}

pub struct DatasetExtractor;

impl Extractor for DatasetExtractor {
    type Output = Vec<String>;

    fn name(&self) -> &'static str {
        "datasets"
    }

    fn extract(&self, text: &str) -> Vec<String> {
        extract_datasets(text)
    }

    fn fallback(&self) -> Vec<String> {
        vec![NOT_SPECIFIED.to_string()]
    }
}

pub struct BaselineExtractor;

impl Extractor for BaselineExtractor {
    type Output = Vec<String>;

    fn name(&self) -> &'static str {
        "baselines"
    }

    fn extract(&self, text: &str) -> Vec<String> {
        extract_baselines(text)
    }

    fn fallback(&self) -> Vec<String> {
        vec![NOT_SPECIFIED.to_string()]
    }
}
