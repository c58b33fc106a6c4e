//! arXiv identifiers and Atom API responses.

use chrono::Datelike;
use once_cell::sync::Lazy;
use papersum_core::{AcquisitionFailure, Error, PaperMetadata, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const ARXIV_API_URL: &str = "https://export.arxiv.org/api/query";

static ARXIV_ID_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"arxiv\.org/abs/([0-9]+\.[0-9]+)",
        r"arxiv\.org/pdf/([0-9]+\.[0-9]+)",
        r"([0-9]+\.[0-9]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Extract an arXiv identifier from an abs/pdf URL or any `<digits>.<digits>` run.
pub fn extract_arxiv_id(url: &str) -> Option<String> {
    ARXIV_ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Query URL for a single identifier.
pub fn api_url(arxiv_id: &str) -> String {
    match url::Url::parse_with_params(ARXIV_API_URL, &[("id_list", arxiv_id)]) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}?id_list={}", ARXIV_API_URL, arxiv_id),
    }
}

/// One `<entry>` of an arXiv Atom feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArxivEntry {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub summary: String,
    pub published: String,
    pub pdf_url: Option<String>,
}

impl ArxivEntry {
    pub fn year(&self) -> Option<i32> {
        chrono::DateTime::parse_from_rfc3339(&self.published)
            .map(|dt| dt.year())
            .ok()
            .or_else(|| self.published.get(..4).and_then(|y| y.parse().ok()))
    }

    /// Bibliographic metadata for the paper with the given identifier.
    pub fn metadata(&self, arxiv_id: &str) -> PaperMetadata {
        PaperMetadata {
            title: Some(self.title.clone()),
            authors: Some(self.authors.join(", ")),
            venue_year: self.year().map(|y| format!("ArXiv {}", y)),
            doi_or_arxiv: Some(format!("arXiv:{}", arxiv_id)),
            abstract_text: Some(self.summary.clone()),
            model_sizes: None,
        }
        .normalized()
    }

    /// PDF location, always over https.
    pub fn pdf_location(&self, arxiv_id: &str) -> String {
        match &self.pdf_url {
            Some(url) if url.starts_with("http://") => url.replacen("http://", "https://", 1),
            Some(url) => url.clone(),
            None => format!("https://arxiv.org/pdf/{}", arxiv_id),
        }
    }

    /// Stand-in document when the full text cannot be downloaded.
    pub fn abstract_only_text(&self) -> String {
        format!(
            "Title: {}\n\nAbstract: {}\n\nNote: Full PDF text could not be retrieved due to connection issues.",
            self.title, self.summary
        )
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    None,
    Id,
    Title,
    Summary,
    Published,
    AuthorName,
}

/// Parse the first entry of an Atom feed. A feed without entries, or with
/// arXiv's error entry, means the identifier does not resolve.
pub fn parse_atom_entry(xml: &str) -> Result<ArxivEntry> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entry: Option<ArxivEntry> = None;
    let mut field = Field::None;
    let mut in_author = false;
    let mut author = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"entry" if entry.is_none() => entry = Some(ArxivEntry::default()),
                b"author" => {
                    in_author = true;
                    author.clear();
                }
                b"id" => field = Field::Id,
                b"title" => field = Field::Title,
                b"summary" => field = Field::Summary,
                b"published" => field = Field::Published,
                b"name" if in_author => field = Field::AuthorName,
                _ => {}
            },
            Ok(Event::Empty(ref e)) if e.local_name().as_ref() == b"link" => {
                if let Some(ref mut current) = entry {
                    let mut href = None;
                    let mut is_pdf = false;
                    for attr in e.attributes().flatten() {
                        let value = attr.unescape_value().unwrap_or_default().to_string();
                        match attr.key.as_ref() {
                            b"href" => href = Some(value),
                            b"title" if value == "pdf" => is_pdf = true,
                            _ => {}
                        }
                    }
                    if is_pdf && current.pdf_url.is_none() {
                        current.pdf_url = href;
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                if let Some(ref mut current) = entry {
                    let text = e.unescape().unwrap_or_default();
                    match field {
                        Field::Id => current.id.push_str(&text),
                        Field::Title => current.title.push_str(&text),
                        Field::Summary => current.summary.push_str(&text),
                        Field::Published => current.published.push_str(&text),
                        Field::AuthorName => author.push_str(&text),
                        Field::None => {}
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"author" => {
                    if let Some(ref mut current) = entry {
                        let name = author.trim();
                        if !name.is_empty() {
                            current.authors.push(name.to_string());
                        }
                    }
                    in_author = false;
                }
                b"entry" => break,
                _ => field = Field::None,
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::acquisition(
                    AcquisitionFailure::MalformedDocument,
                    format!("arXiv response is not valid XML: {}", e),
                ));
            }
            _ => {}
        }
        buf.clear();
    }

    let mut entry = entry
        .ok_or_else(|| Error::acquisition(AcquisitionFailure::NotFound, "no arXiv entry returned"))?;
    if entry.id.contains("/api/errors") || entry.title.trim().is_empty() {
        return Err(Error::acquisition(
            AcquisitionFailure::NotFound,
            format!("arXiv returned an error entry: {}", entry.summary.trim()),
        ));
    }
    entry.title = WHITESPACE.replace_all(entry.title.trim(), " ").into_owned();
    entry.summary = WHITESPACE.replace_all(entry.summary.trim(), " ").into_owned();
    Ok(entry)
}
