//! PaperSum Extract: section segmentation, heuristic entity extraction, summary synthesis.

pub mod extract;
pub mod sections;
pub mod sentences;
pub mod synthesize;

pub use extract::{extract_all, run_isolated, Extraction, Extractor};
pub use sections::{segment, Section, SectionMap};
pub use sentences::{SentenceTokenizer, TokenizerStatus};
pub use synthesize::{synthesize, synthesize_with, Synthesis};
