//! Input source classification.

use serde::{Deserialize, Serialize};

/// What an input string refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// An `http(s)://` address.
    Url,
    /// A path to a local PDF file.
    Pdf,
    /// The input is the paper text itself.
    Text,
}

impl SourceKind {
    /// Classify an input string: URL scheme first, then `.pdf` suffix, else raw text.
    pub fn detect(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url
        } else if trimmed.to_ascii_lowercase().ends_with(".pdf") {
            Self::Pdf
        } else {
            Self::Text
        }
    }

    /// Kind of an uploaded file by extension. Only `.pdf` and `.txt` are accepted.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Pdf => "pdf",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(SourceKind::detect("https://arxiv.org/abs/2301.00001"), SourceKind::Url);
        assert_eq!(SourceKind::detect("http://example.com/paper"), SourceKind::Url);
        assert_eq!(SourceKind::detect("papers/attention.PDF"), SourceKind::Pdf);
        assert_eq!(SourceKind::detect("Abstract\nWe propose X."), SourceKind::Text);
        assert_eq!(SourceKind::detect(""), SourceKind::Text);
    }

    #[test]
    fn test_upload_extensions() {
        assert_eq!(SourceKind::from_extension("pdf"), Some(SourceKind::Pdf));
        assert_eq!(SourceKind::from_extension("TXT"), Some(SourceKind::Text));
        assert_eq!(SourceKind::from_extension("docx"), None);
    }
}
