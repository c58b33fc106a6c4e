//! End-to-end summarization of raw text.

use papersum_core::{PaperMetadata, SummaryReport};
use papersum_extract::{extract_all, segment, synthesize};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::assemble::assemble;
use crate::render::render;

/// Pipeline output for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub report: SummaryReport,
    /// Markdown rendering of `report`.
    pub document: String,
    /// Effective metadata used for the report.
    pub metadata: PaperMetadata,
    /// SHA-256 of the input text.
    pub content_hash: String,
}

/// Compute SHA-256 content hash.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Summarize raw paper text. Deterministic and total: empty input yields the
/// all-sentinel report.
pub fn summarize(raw_text: &str, metadata: &PaperMetadata) -> Summary {
    let start = std::time::Instant::now();
    let metadata = metadata.clone().normalized();
    let hash = content_hash(raw_text);

    let sections = segment(raw_text);
    debug!("[{}] {} section(s) found", &hash[..12], sections.len());

    let extraction = extract_all(raw_text);
    let synthesis = synthesize(raw_text, &sections);
    let report = assemble(&metadata, synthesis, extraction);
    let document = render(&report, &metadata);

    info!(
        "[{}] Summarized {} chars into {} contributions, {} results, {} citations in {}ms",
        &hash[..12],
        raw_text.chars().count(),
        report.contributions.len(),
        report.results.len(),
        report.citations_used.len(),
        start.elapsed().as_millis()
    );

    Summary {
        report,
        document,
        metadata,
        content_hash: hash,
    }
}
