//! Shared application state.

use papersum_acquire::Summarizer;
use papersum_core::PaperSumConfig;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: PaperSumConfig,
    pub summarizer: Summarizer,
}

impl AppState {
    pub fn new(config: PaperSumConfig) -> papersum_core::Result<Self> {
        let summarizer = Summarizer::new(&config)?;
        Ok(Self { config, summarizer })
    }
}
