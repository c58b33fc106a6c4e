//! HTTP route handlers.

pub mod health;
pub mod summarize;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::{Json, Router};
use papersum_core::Error;
use papersum_report::Summary;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .nest("/api", api_routes())
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::routes())
        .merge(summarize::routes())
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Endpoint not found" })),
    )
}

pub(crate) type ApiResponse = (StatusCode, Json<serde_json::Value>);

pub(crate) fn success(summary: Summary) -> ApiResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "markdown": summary.document,
            "json": summary.report,
            "metadata": summary.metadata,
        })),
    )
}

pub(crate) fn bad_request(message: impl Into<String>) -> ApiResponse {
    error_body(StatusCode::BAD_REQUEST, message.into())
}

/// Map a pipeline error to its status: caller mistakes are 400, failures to
/// obtain the document are 502, anything else is 500.
pub(crate) fn failure(context: &str, err: &Error) -> ApiResponse {
    let status = if err.is_input() {
        StatusCode::BAD_REQUEST
    } else if err.is_acquisition() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    if status == StatusCode::BAD_REQUEST {
        tracing::debug!("{} rejected: {}", context, err);
    } else {
        tracing::warn!("{} failed: {}", context, err);
    }
    error_body(status, format!("Error processing {}: {}", context, err))
}

fn error_body(status: StatusCode, message: String) -> ApiResponse {
    (status, Json(serde_json::json!({ "error": message })))
}
