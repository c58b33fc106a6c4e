//! PaperSum: research paper summarization server.

use std::sync::Arc;

use papersum_server::{build_router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = papersum_core::PaperSumConfig::from_env();
    let port = config.port;

    let tokenizer = papersum_extract::sentences::init(config.splitter);
    info!("Sentence tokenizer: {:?}", tokenizer.status());

    let state = Arc::new(
        AppState::new(config).map_err(|e| anyhow::anyhow!("Failed to initialize: {}", e))?,
    );
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("PaperSum server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
