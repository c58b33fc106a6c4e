//! TL;DR and method summary synthesis.

use papersum_core::NOT_SPECIFIED;
use serde::{Deserialize, Serialize};

use crate::sections::{Section, SectionMap};
use crate::sentences::{self, SentenceTokenizer};

/// Characters of raw text used when there is no abstract.
const TLDR_SOURCE_CHARS: usize = 1000;
/// Characters kept when the TL;DR source has fewer than three sentences.
const TLDR_FALLBACK_CHARS: usize = 300;
const METHOD_SOURCE_CHARS: usize = 2000;
const SUMMARY_SENTENCES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synthesis {
    pub tldr: String,
    pub method_summary: String,
}

/// Synthesize with the process-wide sentence tokenizer.
pub fn synthesize(text: &str, sections: &SectionMap) -> Synthesis {
    synthesize_with(sentences::tokenizer(), text, sections)
}

pub fn synthesize_with(tokenizer: &SentenceTokenizer, text: &str, sections: &SectionMap) -> Synthesis {
    let tldr_source = sections
        .get(Section::Abstract)
        .unwrap_or_else(|| char_prefix(text, TLDR_SOURCE_CHARS));
    let tldr_sentences = tokenizer.split(tldr_source);
    let tldr = if tldr_sentences.len() >= SUMMARY_SENTENCES {
        tldr_sentences[..SUMMARY_SENTENCES].join(" ")
    } else {
        char_prefix(tldr_source, TLDR_FALLBACK_CHARS).to_string()
    };

    let method_source = sections
        .get(Section::Method)
        .or_else(|| sections.get(Section::FullText))
        .unwrap_or(text);
    let method_sentences = tokenizer.split(char_prefix(method_source, METHOD_SOURCE_CHARS));
    let method_summary = if method_sentences.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        method_sentences
            .iter()
            .take(SUMMARY_SENTENCES)
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    };

    Synthesis {
        tldr,
        method_summary,
    }
}

/// The first `n` characters of `s`.
pub(crate) fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
