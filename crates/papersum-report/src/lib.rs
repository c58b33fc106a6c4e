//! PaperSum Report: canonical report assembly, Markdown rendering and the
//! end-to-end summarization pipeline.

pub mod assemble;
pub mod pipeline;
pub mod render;

pub use assemble::assemble;
pub use pipeline::{content_hash, summarize, Summary};
pub use render::render;
