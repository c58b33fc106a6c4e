//! Markdown rendering of a summary report.
//!
//! The layout is fixed: every section heading is always emitted and empty
//! categories get a fixed fallback line. A category counts as empty when it
//! holds nothing but the sentinel.

use papersum_core::{has_content, PaperMetadata, SummaryReport, NOT_SPECIFIED};

const WHY_IT_MATTERS: &str = "This research contributes to the field by addressing key challenges \
     and proposing novel solutions with practical implications.";
const FOOTER: &str =
    "*Generated using automated paper summarization. Feel free to modify this summary as needed.*";

const RENDERED_EQUATIONS: usize = 3;
const RENDERED_RESULTS: usize = 5;
const RENDERED_GLOSSARY: usize = 5;
const RENDERED_CITATIONS: usize = 12;

const SEPARATOR: &str = "\n\n---\n\n";

/// Render the report as Markdown. Never fails.
pub fn render(report: &SummaryReport, metadata: &PaperMetadata) -> String {
    let mut md = String::with_capacity(4096);

    let authors = metadata.authors.as_deref().unwrap_or(NOT_SPECIFIED);
    let venue_year = metadata.venue_year.as_deref().unwrap_or(NOT_SPECIFIED);
    let doi = metadata.doi_or_arxiv.as_deref().unwrap_or(NOT_SPECIFIED);

    md.push_str(&format!("# 📄 Research Paper Summary: {}\n\n", report.title));
    md.push_str(&format!("**Authors:** {}  \n", authors));
    md.push_str(&format!("**Venue/Year:** {}  \n", venue_year));
    md.push_str(&format!("**DOI:** {}", doi_link(doi)));

    md.push_str(SEPARATOR);
    md.push_str(&format!("## 🧠 TL;DR\n> {}", report.tldr));

    md.push_str(SEPARATOR);
    md.push_str("## 🚀 Why It Matters\n");
    md.push_str(WHY_IT_MATTERS);

    md.push_str(SEPARATOR);
    md.push_str("## 🔍 Core Contributions");
    push_items(
        &mut md,
        &report.contributions,
        "Core contributions not clearly specified in the paper",
    );

    md.push_str(SEPARATOR);
    md.push_str(&format!("## 🧪 Method\n{}", report.method.summary));
    if !report.method.equations.is_empty() {
        md.push_str("\n\n**Key components:**");
        for eq in report.method.equations.iter().take(RENDERED_EQUATIONS) {
            md.push_str(&format!("\n  - {}", eq));
        }
    }

    md.push_str(SEPARATOR);
    md.push_str("## 📊 Data & Setup\n");
    md.push_str(&format!("- **Datasets:** {}\n", report.datasets.join(", ")));
    md.push_str(&format!("- **Compute:** {}\n", report.setup.compute));
    md.push_str(&format!("- **Baselines:** {}", report.setup.baselines.join(", ")));

    md.push_str(SEPARATOR);
    md.push_str("## 📈 Results");
    if report.results.is_empty() {
        md.push_str("\n- Specific numerical results not clearly extracted from the paper");
    } else {
        md.push_str("\n| Task | Score | Notes |\n|------|-------|-------|\n");
        for result in report.results.iter().take(RENDERED_RESULTS) {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                title_case(&result.metric),
                result.value,
                result.dataset_or_benchmark
            ));
        }
    }

    md.push_str(SEPARATOR);
    md.push_str("## ⚠️ Limitations & Risks");
    push_items(
        &mut md,
        &report.limitations,
        "Limitations not clearly specified in the paper",
    );

    md.push_str(SEPARATOR);
    md.push_str("## 🔁 Reproducibility");
    if report.setup.code_or_data_links.is_empty() {
        md.push_str(&format!("\n- **Code:** {}", NOT_SPECIFIED));
    } else {
        md.push_str(&format!(
            "\n- **Code:** {}",
            report.setup.code_or_data_links.join(", ")
        ));
    }
    if let Some(sizes) = &metadata.model_sizes {
        md.push_str(&format!("\n- **Model Sizes:** {}", sizes));
    }

    md.push_str(SEPARATOR);
    md.push_str("## 📚 Glossary");
    for entry in report.glossary.iter().take(RENDERED_GLOSSARY) {
        if !entry.is_sentinel() {
            md.push_str(&format!("\n- **{}:** {}", entry.term, entry.definition));
        }
    }
    if report.glossary.iter().all(|entry| entry.is_sentinel()) {
        md.push_str("\n- Key terms not clearly extracted from the paper");
    }

    md.push_str(SEPARATOR);
    md.push_str("## 🔗 Citations Used\n");
    if report.citations_used.is_empty() {
        md.push_str("Citations not clearly extracted");
    } else {
        let shown: Vec<&str> = report
            .citations_used
            .iter()
            .take(RENDERED_CITATIONS)
            .map(String::as_str)
            .collect();
        md.push_str(&shown.join(", "));
    }

    md.push_str(SEPARATOR);
    md.push_str(FOOTER);
    md.push('\n');

    md
}

/// Non-sentinel items as bullets, or the fallback bullet when there are none.
fn push_items(md: &mut String, items: &[String], fallback: &str) {
    for item in items.iter().filter(|item| item.as_str() != NOT_SPECIFIED) {
        md.push_str(&format!("\n- {}", item));
    }
    if !has_content(items) {
        md.push_str(&format!("\n- {}", fallback));
    }
}

/// arXiv identifiers link to their abstract page.
fn doi_link(doi: &str) -> String {
    match doi.strip_prefix("arXiv:") {
        Some(id) => format!("[{}](https://arxiv.org/abs/{})", doi, id),
        None => doi.to_string(),
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use papersum_core::{GlossaryEntry, MethodSection, MetricResult, SetupSection};
    use pretty_assertions::assert_eq;

    fn empty_report() -> SummaryReport {
        SummaryReport {
            title: NOT_SPECIFIED.into(),
            tldr: String::new(),
            contributions: vec![NOT_SPECIFIED.into()],
            method: MethodSection {
                summary: NOT_SPECIFIED.into(),
                equations: vec![],
            },
            datasets: vec![NOT_SPECIFIED.into()],
            setup: SetupSection {
                baselines: vec![NOT_SPECIFIED.into()],
                compute: NOT_SPECIFIED.into(),
                code_or_data_links: vec![],
            },
            results: vec![],
            ablations: vec![],
            limitations: vec![NOT_SPECIFIED.into()],
            risks_or_ethics: vec![],
            glossary: vec![GlossaryEntry::sentinel()],
            citations_used: vec![],
        }
    }

    #[test]
    fn test_empty_report_document() {
        let expected = concat!(
            "# 📄 Research Paper Summary: Not specified\n\n",
            "**Authors:** Not specified  \n",
            "**Venue/Year:** Not specified  \n",
            "**DOI:** Not specified\n\n---\n\n",
            "## 🧠 TL;DR\n> \n\n---\n\n",
            "## 🚀 Why It Matters\n",
            "This research contributes to the field by addressing key challenges and proposing ",
            "novel solutions with practical implications.\n\n---\n\n",
            "## 🔍 Core Contributions\n",
            "- Core contributions not clearly specified in the paper\n\n---\n\n",
            "## 🧪 Method\nNot specified\n\n---\n\n",
            "## 📊 Data & Setup\n",
            "- **Datasets:** Not specified\n",
            "- **Compute:** Not specified\n",
            "- **Baselines:** Not specified\n\n---\n\n",
            "## 📈 Results\n",
            "- Specific numerical results not clearly extracted from the paper\n\n---\n\n",
            "## ⚠️ Limitations & Risks\n",
            "- Limitations not clearly specified in the paper\n\n---\n\n",
            "## 🔁 Reproducibility\n- **Code:** Not specified\n\n---\n\n",
            "## 📚 Glossary\n- Key terms not clearly extracted from the paper\n\n---\n\n",
            "## 🔗 Citations Used\nCitations not clearly extracted\n\n---\n\n",
            "*Generated using automated paper summarization. Feel free to modify this summary as needed.*\n",
        );
        assert_eq!(render(&empty_report(), &PaperMetadata::default()), expected);
    }

    #[test]
    fn test_populated_sections() {
        let mut report = empty_report();
        report.title = "Sparse Attention".into();
        report.contributions = vec!["a sparse attention mechanism".into()];
        report.method.equations = (1..=5).map(|i| format!("x_{i}")).collect();
        report.results = vec![MetricResult::unresolved("state-of-the-art", "42.1")];
        report.glossary = vec![GlossaryEntry {
            term: "Attention".into(),
            definition: "weighting mechanism.".into(),
        }];
        report.citations_used = (1..=14).map(|i| i.to_string()).collect();
        let metadata = PaperMetadata {
            doi_or_arxiv: Some("arXiv:2301.00001".into()),
            model_sizes: Some("7B, 13B".into()),
            ..Default::default()
        };

        let md = render(&report, &metadata);
        assert!(md.starts_with("# 📄 Research Paper Summary: Sparse Attention\n"));
        assert!(md.contains("**DOI:** [arXiv:2301.00001](https://arxiv.org/abs/2301.00001)\n"));
        assert!(md.contains("## 🔍 Core Contributions\n- a sparse attention mechanism\n\n---"));
        assert!(md.contains("**Key components:**\n  - x_1\n  - x_2\n  - x_3\n\n---"));
        assert!(md.contains(
            "| Task | Score | Notes |\n|------|-------|-------|\n\
             | State-Of-The-Art | 42.1 | Not specified |\n\n\n---"
        ));
        assert!(md.contains("- **Model Sizes:** 7B, 13B"));
        assert!(md.contains("- **Attention:** weighting mechanism."));
        assert!(md.contains("\n1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12\n"));
        assert!(!md.contains("Key terms not clearly extracted"));
    }

    #[test]
    fn test_sentinels_skipped_in_lists() {
        let mut report = empty_report();
        report.limitations = vec![NOT_SPECIFIED.into(), "needs labels.".into()];
        let md = render(&report, &PaperMetadata::default());
        assert!(md.contains("## ⚠️ Limitations & Risks\n- needs labels.\n\n---"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("accuracy"), "Accuracy");
        assert_eq!(title_case("f1"), "F1");
        assert_eq!(title_case("state-of-the-art"), "State-Of-The-Art");
    }
}
