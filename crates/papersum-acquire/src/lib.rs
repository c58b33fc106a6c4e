//! PaperSum Acquire: turns files, URLs and arXiv identifiers into raw text
//! plus partial metadata, and wraps the summarization pipeline behind one
//! async entry point.

pub mod arxiv;
pub mod fetch;
pub mod file;
pub mod html;
pub mod retry;
pub mod source;
pub mod summarizer;

pub use arxiv::{extract_arxiv_id, ArxivEntry};
pub use fetch::{Acquired, Fetcher};
pub use file::{pdf_bytes_to_text, read_pdf_file, read_text_file};
pub use html::html_to_text;
pub use source::SourceKind;
pub use summarizer::{summarize_text, Summarizer};
