//! One-call facade: acquire a source, then summarize it.

use std::path::Path;

use papersum_core::{AcquisitionFailure, Error, PaperMetadata, PaperSumConfig, Result};
use papersum_report::Summary;
use tracing::{debug, info};

use crate::fetch::{Acquired, Fetcher};
use crate::file::{pdf_bytes_to_text, read_pdf_file};
use crate::source::SourceKind;

pub struct Summarizer {
    fetcher: Fetcher,
}

impl Summarizer {
    pub fn new(config: &PaperSumConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
        })
    }

    /// Obtain the raw text of `input`. `Text` inputs are the document itself.
    pub async fn acquire(&self, input: &str, kind: SourceKind) -> Result<Acquired> {
        let acquired = match kind {
            SourceKind::Url => self.fetcher.fetch_url(input).await?,
            SourceKind::Pdf => {
                let path = input.trim().to_string();
                let text = tokio::task::spawn_blocking(move || read_pdf_file(Path::new(&path)))
                    .await
                    .map_err(|e| Error::Internal(format!("PDF reading task failed: {}", e)))??;
                Acquired {
                    text,
                    metadata: PaperMetadata::default(),
                }
            }
            SourceKind::Text => Acquired {
                text: input.to_string(),
                metadata: PaperMetadata::default(),
            },
        };

        if kind != SourceKind::Text && acquired.text.trim().is_empty() {
            return Err(Error::acquisition(
                AcquisitionFailure::MalformedDocument,
                format!("no text could be extracted from {} source", kind),
            ));
        }
        debug!("Acquired {} chars from {} source", acquired.text.len(), kind);
        Ok(acquired)
    }

    /// Summarize any source. The kind is detected from `input` when not given.
    /// Caller metadata takes precedence over metadata found at the source.
    pub async fn summarize_source(
        &self,
        input: &str,
        kind: Option<SourceKind>,
        metadata: PaperMetadata,
    ) -> Result<Summary> {
        let kind = kind.unwrap_or_else(|| SourceKind::detect(input));
        info!("Summarizing {} source", kind);

        let Acquired {
            text,
            metadata: mut discovered,
        } = self.acquire(input, kind).await?;
        discovered.merge(metadata);
        summarize_text(text, discovered).await
    }

    /// Summarize an uploaded file already held in memory.
    pub async fn summarize_bytes(
        &self,
        kind: SourceKind,
        bytes: Vec<u8>,
        metadata: PaperMetadata,
    ) -> Result<Summary> {
        let text = match kind {
            SourceKind::Pdf => tokio::task::spawn_blocking(move || pdf_bytes_to_text(&bytes))
                .await
                .map_err(|e| Error::Internal(format!("PDF extraction task failed: {}", e)))??,
            SourceKind::Text => String::from_utf8_lossy(&bytes).into_owned(),
            SourceKind::Url => {
                return Err(Error::UnsupportedSource(
                    "uploads must be PDF or text files".to_string(),
                ))
            }
        };
        if kind == SourceKind::Pdf && text.trim().is_empty() {
            return Err(Error::acquisition(
                AcquisitionFailure::MalformedDocument,
                "no text could be extracted from the PDF",
            ));
        }
        summarize_text(text, metadata).await
    }
}

/// Summarize text off the async runtime. Empty text is rejected.
pub async fn summarize_text(text: String, metadata: PaperMetadata) -> Result<Summary> {
    if text.trim().is_empty() {
        return Err(Error::InvalidInput("Text is required".to_string()));
    }
    tokio::task::spawn_blocking(move || papersum_report::summarize(&text, &metadata))
        .await
        .map_err(|e| Error::Internal(format!("Summarization task failed: {}", e)))
}
