//! Pipeline properties over whole documents.

use papersum_core::{PaperMetadata, NOT_SPECIFIED};
use papersum_report::summarize;
use pretty_assertions::assert_eq;

const PAPER: &str = "Sparse Attention for Long Documents

Abstract
We propose a sparse attention mechanism for long inputs. We show it matches dense \
attention on GLUE. It runs twice as fast [1].

1. Introduction
Transformers are widely used (Vaswani et al., 2017). However, attention is quadratic \
in sequence length. Our contributions:
- a top-k attention kernel
- a benchmark of long documents
2. Method
Attention is a weighting of tokens by relevance. We keep the top-k weights $w_k$ per \
query. The kernel uses $$O(nk)$$ memory.
3. Experiments
We evaluate on SQuAD and ImageNet. We compare against Longformer and BigBird.
The model reaches 89.2% accuracy and F1 = 91.4 [2, 3].
4. Conclusion
Sparse attention is practical.
References
[1] A. Author. 2020.
";

fn metadata() -> PaperMetadata {
    PaperMetadata {
        title: Some("Sparse Attention for Long Documents".into()),
        authors: Some("A. Author, B. Author".into()),
        venue_year: Some("ArXiv 2024".into()),
        doi_or_arxiv: Some("arXiv:2401.00001".into()),
        ..Default::default()
    }
}

#[test]
fn test_deterministic() {
    let a = summarize(PAPER, &metadata());
    let b = summarize(PAPER, &metadata());
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a.report).unwrap(),
        serde_json::to_string(&b.report).unwrap()
    );
}

#[test]
fn test_caps_and_non_empty_categories() {
    let report = summarize(PAPER, &metadata()).report;
    assert!(report.method.equations.len() <= 5);
    assert!(report.results.len() <= 10);
    assert!(report.citations_used.len() <= 20);
    assert!(!report.contributions.is_empty() && report.contributions.len() <= 5);
    assert!(!report.limitations.is_empty() && report.limitations.len() <= 3);
    assert!(!report.glossary.is_empty() && report.glossary.len() <= 10);
    assert!(!report.datasets.is_empty());
    assert!(!report.setup.baselines.is_empty());
}

#[test]
fn test_citations_sorted_and_unique() {
    let citations = summarize(PAPER, &metadata()).report.citations_used;
    let mut expected = citations.clone();
    expected.sort();
    expected.dedup();
    assert_eq!(citations, expected);
    assert!(citations.contains(&"Vaswani et al., 2017".to_string()));
    assert!(citations.contains(&"2, 3".to_string()));
}

#[test]
fn test_document_contains_report_items() {
    let summary = summarize(PAPER, &metadata());
    let report = &summary.report;
    for item in report.contributions.iter().chain(report.limitations.iter()) {
        if item != NOT_SPECIFIED {
            assert!(summary.document.contains(item.as_str()), "missing {item:?}");
        }
    }
    for entry in report.glossary.iter().take(5).filter(|e| !e.is_sentinel()) {
        assert!(summary.document.contains(&entry.term));
        assert!(summary.document.contains(&entry.definition));
    }
    assert!(summary
        .document
        .contains("**DOI:** [arXiv:2401.00001](https://arxiv.org/abs/2401.00001)"));
}

#[test]
fn test_extracted_content() {
    let report = summarize(PAPER, &metadata()).report;
    assert_eq!(report.title, "Sparse Attention for Long Documents");
    assert_eq!(
        report.tldr,
        "We propose a sparse attention mechanism for long inputs. We show it matches dense \
         attention on GLUE. It runs twice as fast [1]."
    );
    assert_eq!(report.datasets, vec!["GLUE", "ImageNet", "SQuAD"]);
    assert_eq!(report.setup.baselines, vec!["Longformer and BigBird"]);
    assert_eq!(report.method.equations, vec!["O(nk)", "w_k"]);
    assert!(report
        .results
        .iter()
        .any(|r| r.metric == "accuracy" && r.value == "89.2%"));
}

#[test]
fn test_empty_input_yields_sentinel_report() {
    let summary = summarize("", &PaperMetadata::default());
    let report = &summary.report;
    assert_eq!(report.title, NOT_SPECIFIED);
    assert_eq!(report.tldr, "");
    assert_eq!(report.contributions, vec![NOT_SPECIFIED]);
    assert_eq!(report.datasets, vec![NOT_SPECIFIED]);
    assert_eq!(report.limitations, vec![NOT_SPECIFIED]);
    assert!(report.glossary[0].is_sentinel());
    assert!(report.results.is_empty());
    assert!(report.citations_used.is_empty());
    assert!(summary.document.contains("Citations not clearly extracted"));
}

#[test]
fn test_abstract_becomes_tldr() {
    let text = "Abstract\nWe propose X. We show Y. It works.\n\nIntroduction\n...";
    let report = summarize(text, &PaperMetadata::default()).report;
    assert_eq!(report.tldr, "We propose X. We show Y. It works.");
}

#[test]
fn test_scenario_citation_order() {
    let text = "Dense models [1] are costly (Smith et al., 2020).";
    let report = summarize(text, &PaperMetadata::default()).report;
    assert_eq!(report.citations_used, vec!["1", "Smith et al., 2020"]);
}

#[test]
fn test_benchmark_score_without_metric() {
    let report = summarize("GLUE: 89.2%", &PaperMetadata::default()).report;
    assert!(report.results.is_empty());
    let report = summarize("We get 89.2% accuracy", &PaperMetadata::default()).report;
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].metric, "accuracy");
    assert_eq!(report.results[0].value, "89.2%");
}

#[test]
fn test_unstructured_text_uses_prefix() {
    let text = "plain words ".repeat(200);
    let report = summarize(&text, &PaperMetadata::default()).report;
    assert_eq!(report.tldr.chars().count(), 300);
    assert!(text.starts_with(&report.tldr));
}

#[test]
fn test_blank_metadata_is_absent() {
    let metadata = PaperMetadata {
        title: Some("   ".into()),
        ..Default::default()
    };
    let summary = summarize("Some text.", &metadata);
    assert_eq!(summary.report.title, NOT_SPECIFIED);
    assert_eq!(summary.metadata.title, None);
    assert_eq!(summary.content_hash.len(), 64);
}
