//! Numeric results: metric names next to numbers.

use once_cell::sync::Lazy;
use papersum_core::MetricResult;
use regex::Regex;

use super::Extractor;

/// One pattern family and the capture groups holding the metric and value.
struct MetricPattern {
    regex: Regex,
    metric_group: usize,
    value_group: usize,
}

impl MetricPattern {
    fn new(pattern: &str, metric_group: usize, value_group: usize) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            metric_group,
            value_group,
        }
    }
}

static METRIC_PATTERNS: Lazy<Vec<MetricPattern>> = Lazy::new(|| {
    vec![
        // accuracy: 91.5%
        MetricPattern::new(r"(?i)(accuracy|f1|bleu|rouge|perplexity|loss)\s*[:=]\s*([\d.]+%?)", 1, 2),
        // 91.5% accuracy
        MetricPattern::new(r"(?i)([\d.]+%?)\s*(accuracy|f1|bleu|rouge)", 2, 1),
        // achieves 91.5% accuracy
        MetricPattern::new(r"(?i)achieves?\s+([\d.]+%?)\s+(accuracy|f1|bleu|rouge)", 2, 1),
        // state-of-the-art ... 91.5
        MetricPattern::new(r"(?i)(state-of-the-art|sota|best)\s+.*?([\d.]+%?)", 1, 2),
    ]
});

/// Metric/value pairs in family order, then text order. Provenance is unresolved.
///
/// Only families with exactly two capture groups produce results; any other
/// shape is skipped as a whole.
pub fn extract_results(text: &str) -> Vec<MetricResult> {
    let mut results = Vec::new();
    for pattern in METRIC_PATTERNS.iter() {
        // captures_len counts the implicit whole-match group.
        if pattern.regex.captures_len() != 3 {
            tracing::debug!("Skipping metric pattern with unexpected group count: {}", pattern.regex);
            continue;
        }
        for caps in pattern.regex.captures_iter(text) {
            if let (Some(metric), Some(value)) =
                (caps.get(pattern.metric_group), caps.get(pattern.value_group))
            {
                results.push(MetricResult::unresolved(
                    metric.as_str().to_lowercase(),
                    value.as_str(),
                ));
            }
        }
    }
    results
}

pub struct ResultExtractor;

impl Extractor for ResultExtractor {
    type Output = Vec<MetricResult>;

    fn name(&self) -> &'static str {
        "results"
    }

    fn extract(&self, text: &str) -> Vec<MetricResult> {
        extract_results(text)
    }

    fn fallback(&self) -> Vec<MetricResult> {
        Vec::new()
    }
}
