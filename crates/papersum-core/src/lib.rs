//! PaperSum Core: error type, configuration, paper metadata and the canonical report model.

pub mod config;
pub mod error;
pub mod types;

pub use config::{PaperSumConfig, RetryPolicy, SplitterMode};
pub use error::{AcquisitionFailure, Error, Result};
pub use types::{
    has_content, GlossaryEntry, MethodSection, MetricResult, PaperMetadata, SetupSection,
    SummaryReport, NOT_SPECIFIED,
};
