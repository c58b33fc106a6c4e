//! Sentence tokenizer.
//!
//! The default splitter uses UAX #29 sentence boundaries with a merge pass for
//! common scholarly abbreviations. Line breaks are treated as ordinary spaces
//! so that hard-wrapped PDF text does not split mid-sentence. When the
//! boundary splitter is disabled or fails its self-check, a plain
//! punctuation-plus-whitespace splitter is used instead.

use once_cell::sync::OnceCell;
use papersum_core::{PaperSumConfig, SplitterMode};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that end with a period but rarely end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "e.g.", "i.e.", "al.", "fig.", "figs.", "eq.", "eqs.", "dr.", "mr.", "mrs.", "ms.", "prof.",
    "vs.", "cf.", "sec.", "approx.", "resp.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerStatus {
    /// Boundary-aware splitting is active.
    Available,
    /// Falling back to punctuation-plus-whitespace splitting.
    Degraded,
}

#[derive(Debug)]
pub struct SentenceTokenizer {
    status: TokenizerStatus,
}

static TOKENIZER: OnceCell<SentenceTokenizer> = OnceCell::new();

/// Install the process-wide tokenizer. The first call wins.
pub fn init(mode: SplitterMode) -> &'static SentenceTokenizer {
    TOKENIZER.get_or_init(|| SentenceTokenizer::new(mode))
}

/// The process-wide tokenizer, configured from the environment on first use.
pub fn tokenizer() -> &'static SentenceTokenizer {
    TOKENIZER.get_or_init(|| SentenceTokenizer::new(PaperSumConfig::from_env().splitter))
}

impl SentenceTokenizer {
    pub fn new(mode: SplitterMode) -> Self {
        let status = match mode {
            SplitterMode::Simple => TokenizerStatus::Degraded,
            SplitterMode::Unicode if self_check() => TokenizerStatus::Available,
            SplitterMode::Unicode => {
                tracing::warn!("Sentence boundary splitter failed its self-check, using simple splitter");
                TokenizerStatus::Degraded
            }
        };
        tracing::debug!("Sentence tokenizer status: {:?}", status);
        Self { status }
    }

    pub fn status(&self) -> TokenizerStatus {
        self.status
    }

    /// Split text into trimmed, non-empty sentences.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self.status {
            TokenizerStatus::Available => split_bounded(text),
            TokenizerStatus::Degraded => split_simple(text),
        }
    }
}

fn self_check() -> bool {
    split_bounded("The model works, e.g. on text. It also scales.").len() == 2
}

fn ends_with_abbreviation(span: &str) -> bool {
    let last = match span.split_whitespace().last() {
        Some(word) => word.trim_start_matches(['(', '[']).to_lowercase(),
        None => return false,
    };
    ABBREVIATIONS.contains(&last.as_str())
}

fn split_bounded(text: &str) -> Vec<&str> {
    // Same byte length per replaced char, so offsets stay valid for `text`.
    let flattened: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    let mut spans: Vec<(usize, usize)> = Vec::new();
    for (start, piece) in flattened.split_sentence_bound_indices() {
        let end = start + piece.len();
        match spans.last_mut() {
            Some(last) if ends_with_abbreviation(&text[last.0..last.1]) => last.1 = end,
            _ => spans.push((start, end)),
        }
    }

    spans
        .into_iter()
        .map(|(start, end)| text[start..end].trim())
        .filter(|s| !s.is_empty())
        .collect()
}

fn split_simple(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if (b == b'.' || b == b'!' || b == b'?')
            && i + 1 < bytes.len()
            && bytes[i + 1].is_ascii_whitespace()
        {
            let s = text[start..=i].trim();
            if !s.is_empty() {
                sentences.push(s);
            }
            start = i + 1;
        }
    }
    let s = text[start..].trim();
    if !s.is_empty() {
        sentences.push(s);
    }
    sentences
}
