//! PaperSum HTTP server: upload, URL and raw-text summarization endpoints.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
