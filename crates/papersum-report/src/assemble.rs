//! Report assembly: merge extraction and synthesis output into one capped report.

use papersum_core::{
    GlossaryEntry, MethodSection, PaperMetadata, SetupSection, SummaryReport, NOT_SPECIFIED,
};
use papersum_extract::{Extraction, Synthesis};

pub const MAX_EQUATIONS: usize = 5;
pub const MAX_RESULTS: usize = 10;
pub const MAX_CITATIONS: usize = 20;
pub const MAX_CONTRIBUTIONS: usize = 5;
pub const MAX_LIMITATIONS: usize = 3;
pub const MAX_GLOSSARY: usize = 10;

fn capped<T>(mut items: Vec<T>, cap: usize) -> Vec<T> {
    items.truncate(cap);
    items
}

fn or_sentinel(items: Vec<String>) -> Vec<String> {
    if items.is_empty() {
        vec![NOT_SPECIFIED.to_string()]
    } else {
        items
    }
}

/// Build the canonical report. Pure; never fails.
pub fn assemble(metadata: &PaperMetadata, synthesis: Synthesis, extraction: Extraction) -> SummaryReport {
    let glossary = capped(extraction.glossary, MAX_GLOSSARY);
    let glossary = if glossary.is_empty() {
        vec![GlossaryEntry::sentinel()]
    } else {
        glossary
    };

    SummaryReport {
        title: metadata
            .title
            .clone()
            .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        tldr: synthesis.tldr,
        contributions: or_sentinel(capped(extraction.contributions, MAX_CONTRIBUTIONS)),
        method: MethodSection {
            summary: synthesis.method_summary,
            equations: capped(extraction.equations, MAX_EQUATIONS),
        },
        datasets: or_sentinel(extraction.datasets),
        setup: SetupSection {
            baselines: or_sentinel(extraction.baselines),
            compute: NOT_SPECIFIED.to_string(),
            code_or_data_links: Vec::new(),
        },
        results: capped(extraction.results, MAX_RESULTS),
        ablations: Vec::new(),
        limitations: or_sentinel(capped(extraction.limitations, MAX_LIMITATIONS)),
        risks_or_ethics: Vec::new(),
        glossary,
        citations_used: capped(extraction.citations, MAX_CITATIONS),
    }
}
