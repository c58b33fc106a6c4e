//! Paper metadata and the canonical summary report.
//!
//! `SummaryReport` is the wire contract consumed by the HTTP and CLI front ends.
//! Field order and names are fixed; serde serializes them in declaration order.

use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel used wherever a category yields nothing.
pub const NOT_SPECIFIED: &str = "Not specified";

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Caller-supplied or discovered bibliographic metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperMetadata {
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub venue_year: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub doi_or_arxiv: Option<String>,
    #[serde(
        rename = "abstract",
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub abstract_text: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub model_sizes: Option<String>,
}

impl PaperMetadata {
    /// Overlay `other` onto `self`; present fields in `other` win.
    pub fn merge(&mut self, other: PaperMetadata) {
        let other = other.normalized();
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() { self.$field = other.$field; })*
            };
        }
        take!(title, authors, venue_year, doi_or_arxiv, abstract_text, model_sizes);
    }

    /// Drop fields that are empty or whitespace only.
    pub fn normalized(self) -> Self {
        let keep = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            title: keep(self.title),
            authors: keep(self.authors),
            venue_year: keep(self.venue_year),
            doi_or_arxiv: keep(self.doi_or_arxiv),
            abstract_text: keep(self.abstract_text),
            model_sizes: keep(self.model_sizes),
        }
    }
}

/// A numeric result found in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricResult {
    pub metric: String,
    pub value: String,
    pub dataset_or_benchmark: String,
    pub compared_to: String,
    pub evidence_citation: String,
}

impl MetricResult {
    /// A result whose provenance fields are unresolved.
    pub fn unresolved(metric: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            value: value.into(),
            dataset_or_benchmark: NOT_SPECIFIED.to_string(),
            compared_to: NOT_SPECIFIED.to_string(),
            evidence_citation: NOT_SPECIFIED.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub term: String,
    pub definition: String,
}

impl GlossaryEntry {
    pub fn sentinel() -> Self {
        Self {
            term: NOT_SPECIFIED.to_string(),
            definition: NOT_SPECIFIED.to_string(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.term == NOT_SPECIFIED
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSection {
    pub summary: String,
    pub equations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupSection {
    pub baselines: Vec<String>,
    pub compute: String,
    pub code_or_data_links: Vec<String>,
}

/// Canonical structured summary of one paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub title: String,
    pub tldr: String,
    pub contributions: Vec<String>,
    pub method: MethodSection,
    pub datasets: Vec<String>,
    pub setup: SetupSection,
    pub results: Vec<MetricResult>,
    pub ablations: Vec<String>,
    pub limitations: Vec<String>,
    pub risks_or_ethics: Vec<String>,
    pub glossary: Vec<GlossaryEntry>,
    pub citations_used: Vec<String>,
}

/// True when the list holds at least one value other than the sentinel.
pub fn has_content(items: &[String]) -> bool {
    items.iter().any(|item| item != NOT_SPECIFIED)
}
