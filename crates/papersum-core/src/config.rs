//! Configuration loaded from the environment.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default User-Agent for outbound requests. Some publishers reject unknown clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Retry schedule for document acquisition: `base_delay * 2^attempt` between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after the given zero-based failed attempt.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
        Duration::from_millis(self.base_delay_ms.saturating_mul(factor))
    }
}

/// Sentence splitter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitterMode {
    /// UAX #29 boundaries with abbreviation merging.
    Unicode,
    /// Punctuation followed by whitespace.
    Simple,
}

impl SplitterMode {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Some(Self::Unicode),
            "simple" => Some(Self::Simple),
            _ => None,
        }
    }
}

/// Top-level PaperSum configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperSumConfig {
    /// HTTP server port.
    pub port: u16,
    /// Largest accepted upload body.
    pub max_upload_bytes: usize,
    /// Timeout for page and API requests.
    pub http_timeout_secs: u64,
    /// Timeout for PDF downloads.
    pub pdf_timeout_secs: u64,
    pub retry: RetryPolicy,
    pub user_agent: String,
    pub splitter: SplitterMode,
}

impl Default for PaperSumConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            max_upload_bytes: 16 * 1024 * 1024,
            http_timeout_secs: 30,
            pdf_timeout_secs: 60,
            retry: RetryPolicy::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            splitter: SplitterMode::Unicode,
        }
    }
}

impl PaperSumConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unparseable values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());

        let splitter = match lookup("PAPERSUM_SENTENCE_SPLITTER") {
            Some(raw) => SplitterMode::parse(&raw).unwrap_or_else(|| {
                tracing::warn!("Unknown sentence splitter '{}', using unicode", raw);
                SplitterMode::Unicode
            }),
            None => defaults.splitter,
        };

        Self {
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            max_upload_bytes: parsed("PAPERSUM_MAX_UPLOAD_BYTES")
                .map(|v| v as usize)
                .unwrap_or(defaults.max_upload_bytes),
            http_timeout_secs: parsed("PAPERSUM_HTTP_TIMEOUT_SECS")
                .unwrap_or(defaults.http_timeout_secs),
            pdf_timeout_secs: parsed("PAPERSUM_PDF_TIMEOUT_SECS")
                .unwrap_or(defaults.pdf_timeout_secs),
            retry: RetryPolicy {
                max_attempts: parsed("PAPERSUM_RETRY_ATTEMPTS")
                    .map(|v| v.clamp(1, 10) as u32)
                    .unwrap_or(defaults.retry.max_attempts),
                base_delay_ms: parsed("PAPERSUM_RETRY_BASE_MS")
                    .unwrap_or(defaults.retry.base_delay_ms),
            },
            user_agent: lookup("PAPERSUM_USER_AGENT")
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or(defaults.user_agent),
            splitter,
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn pdf_timeout(&self) -> Duration {
        Duration::from_secs(self.pdf_timeout_secs)
    }
}
