//! Remote document acquisition over HTTP.

use std::time::Duration;

use papersum_core::{AcquisitionFailure, Error, PaperMetadata, PaperSumConfig, Result, RetryPolicy};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::arxiv::{self, extract_arxiv_id, ArxivEntry};
use crate::file::pdf_bytes_to_text;
use crate::html::html_to_text;
use crate::retry::with_retries;

/// Raw text of a document plus whatever metadata the source revealed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acquired {
    pub text: String,
    pub metadata: PaperMetadata,
}

/// HTTP client for web pages, PDFs and the arXiv API.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    pdf_timeout: Duration,
    retry: RetryPolicy,
}

impl Fetcher {
    pub fn new(config: &PaperSumConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            pdf_timeout: config.pdf_timeout(),
            retry: config.retry,
        })
    }

    /// Fetch a URL. arXiv links go through the arXiv API; anything else is
    /// downloaded once and converted according to its content type.
    pub async fn fetch_url(&self, raw_url: &str) -> Result<Acquired> {
        let url = url::Url::parse(raw_url.trim())
            .map_err(|e| Error::InvalidInput(format!("Invalid URL '{}': {}", raw_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::UnsupportedSource(format!(
                "unsupported URL scheme '{}'",
                url.scheme()
            )));
        }

        let is_arxiv = url
            .host_str()
            .map(|host| host == "arxiv.org" || host.ends_with(".arxiv.org"))
            .unwrap_or(false);
        if is_arxiv {
            if let Some(id) = extract_arxiv_id(url.as_str()) {
                return self.fetch_arxiv(&id).await;
            }
        }

        self.fetch_page(url.as_str()).await
    }

    /// Full text of an arXiv paper, degrading to its abstract when the PDF
    /// cannot be downloaded.
    pub async fn fetch_arxiv(&self, arxiv_id: &str) -> Result<Acquired> {
        let label = format!("arXiv {}", arxiv_id);
        match with_retries(&self.retry, &label, || self.arxiv_full_text(arxiv_id)).await {
            Ok(acquired) => Ok(acquired),
            Err(e @ Error::Acquisition {
                kind: AcquisitionFailure::NotFound,
                ..
            }) => Err(e),
            Err(e) => {
                warn!("{}: full text unavailable ({}), falling back to abstract", label, e);
                match self.lookup_arxiv(arxiv_id).await {
                    Ok(entry) => Ok(Acquired {
                        text: entry.abstract_only_text(),
                        metadata: entry.metadata(arxiv_id),
                    }),
                    Err(fallback) => Err(Error::acquisition(
                        AcquisitionFailure::RetriesExhausted,
                        format!("{}: {} (abstract lookup: {})", label, e, fallback),
                    )),
                }
            }
        }
    }

    /// Metadata for one arXiv identifier.
    pub async fn lookup_arxiv(&self, arxiv_id: &str) -> Result<ArxivEntry> {
        let body = self
            .get(&arxiv::api_url(arxiv_id), None)
            .await?
            .text()
            .await
            .map_err(classify)?;
        arxiv::parse_atom_entry(&body)
    }

    async fn arxiv_full_text(&self, arxiv_id: &str) -> Result<Acquired> {
        let entry = self.lookup_arxiv(arxiv_id).await?;
        let pdf_url = entry.pdf_location(arxiv_id);
        debug!("Downloading {}", pdf_url);

        let bytes = self
            .get(&pdf_url, Some(self.pdf_timeout))
            .await?
            .bytes()
            .await
            .map_err(classify)?;
        let text = pdf_to_text(bytes.to_vec()).await?;
        info!("Fetched arXiv {} ({} chars)", arxiv_id, text.len());

        Ok(Acquired {
            text,
            metadata: entry.metadata(arxiv_id),
        })
    }

    async fn fetch_page(&self, url: &str) -> Result<Acquired> {
        let response = self.get(url, None).await?;
        let is_pdf = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.to_ascii_lowercase().contains("application/pdf"))
            .unwrap_or(false);

        if is_pdf {
            let bytes = response.bytes().await.map_err(classify)?;
            let text = pdf_to_text(bytes.to_vec()).await?;
            return Ok(Acquired {
                text,
                metadata: PaperMetadata::default(),
            });
        }

        let html = response.text().await.map_err(classify)?;
        let (text, title) = html_to_text(&html);
        debug!("Fetched {} ({} chars)", url, text.len());
        Ok(Acquired {
            text,
            metadata: PaperMetadata {
                title,
                ..Default::default()
            },
        })
    }

    async fn get(&self, url: &str, timeout: Option<Duration>) -> Result<reqwest::Response> {
        let mut request = self.client.get(url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }
        request
            .send()
            .await
            .map_err(classify)?
            .error_for_status()
            .map_err(classify)
    }
}

async fn pdf_to_text(bytes: Vec<u8>) -> Result<String> {
    tokio::task::spawn_blocking(move || pdf_bytes_to_text(&bytes))
        .await
        .map_err(|e| Error::Internal(format!("PDF extraction task failed: {}", e)))?
}

fn classify(e: reqwest::Error) -> Error {
    let kind = if e.is_timeout() {
        AcquisitionFailure::Timeout
    } else if e.is_status() {
        AcquisitionFailure::HttpStatus
    } else if e.is_decode() {
        AcquisitionFailure::MalformedDocument
    } else {
        AcquisitionFailure::Network
    };
    Error::acquisition(kind, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port.
    async fn serve_once(status: &'static str, content_type: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let mut request = Vec::new();
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                content_type,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{}/paper", addr)
    }

    fn fetcher() -> Fetcher {
        let mut config = PaperSumConfig::default();
        config.retry.base_delay_ms = 1;
        Fetcher::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_html_page_text_and_title() {
        let url = serve_once(
            "200 OK",
            "text/html; charset=utf-8",
            "<html><head><title>Sparse Attention</title></head><body><p>We propose X.</p></body></html>",
        )
        .await;
        let acquired = fetcher().fetch_url(&url).await.unwrap();
        assert!(acquired.text.ends_with("We propose X."));
        assert_eq!(acquired.metadata.title.as_deref(), Some("Sparse Attention"));
    }

    #[tokio::test]
    async fn test_error_status_is_classified() {
        let url = serve_once("404 Not Found", "text/plain", "gone").await;
        let err = fetcher().fetch_url(&url).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Acquisition {
                kind: AcquisitionFailure::HttpStatus,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_pdf_content_type_goes_through_pdf_reader() {
        let url = serve_once("200 OK", "application/pdf", "definitely not a pdf").await;
        let err = fetcher().fetch_url(&url).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Acquisition {
                kind: AcquisitionFailure::MalformedDocument,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_rejects_bad_urls() {
        let fetcher = fetcher();
        assert!(matches!(
            fetcher.fetch_url("not a url").await,
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            fetcher.fetch_url("ftp://example.com/paper.pdf").await,
            Err(Error::UnsupportedSource(_))
        ));
    }
}
