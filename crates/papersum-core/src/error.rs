//! Error types for PaperSum.

use thiserror::Error;

/// Why acquiring a document failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionFailure {
    /// Connection could not be established or was reset.
    Network,
    /// The request exceeded its timeout.
    Timeout,
    /// The remote answered with a non-success status.
    HttpStatus,
    /// The bytes were obtained but are not a readable document.
    MalformedDocument,
    /// Every retry attempt failed.
    RetriesExhausted,
    /// The identifier does not resolve to a paper.
    NotFound,
}

impl std::fmt::Display for AcquisitionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::Timeout => write!(f, "timeout"),
            Self::HttpStatus => write!(f, "http status"),
            Self::MalformedDocument => write!(f, "malformed document"),
            Self::RetriesExhausted => write!(f, "retries exhausted"),
            Self::NotFound => write!(f, "not found"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported source: {0}")]
    UnsupportedSource(String),

    #[error("Acquisition error ({kind}): {message}")]
    Acquisition {
        kind: AcquisitionFailure,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn acquisition(kind: AcquisitionFailure, message: impl Into<String>) -> Self {
        Self::Acquisition {
            kind,
            message: message.into(),
        }
    }

    /// True for failures to obtain text, as opposed to bad caller input.
    pub fn is_acquisition(&self) -> bool {
        matches!(self, Self::Acquisition { .. } | Self::Io(_) | Self::Http(_))
    }

    /// True for errors caused by the caller's request.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::UnsupportedSource(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let err = Error::acquisition(AcquisitionFailure::RetriesExhausted, "arXiv 2301.00001");
        assert!(err.is_acquisition());
        assert!(!err.is_input());
        assert_eq!(
            err.to_string(),
            "Acquisition error (retries exhausted): arXiv 2301.00001"
        );

        let err = Error::InvalidInput("Text is required".into());
        assert!(err.is_input());
        assert!(!err.is_acquisition());
    }
}
