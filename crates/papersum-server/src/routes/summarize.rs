//! Summarization routes: file upload, URL and raw text.

use std::sync::Arc;

use axum::extract::multipart::MultipartError;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use papersum_acquire::SourceKind;
use papersum_core::PaperMetadata;
use serde::Deserialize;

use super::{bad_request, failure, success, ApiResponse};
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/summarize", post(summarize_file))
        .route("/summarize_url", post(summarize_url))
        .route("/summarize_text", post(summarize_text))
}

#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    pub url: Option<String>,
    pub metadata: Option<PaperMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: Option<String>,
    pub metadata: Option<PaperMetadata>,
}

/// POST /api/summarize: multipart upload of one `.pdf` or `.txt` file plus
/// optional metadata fields.
async fn summarize_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResponse {
    let Ok(mut multipart) = multipart else {
        return bad_request("No file uploaded");
    };
    let limit = state.config.max_upload_bytes;

    let mut upload: Option<(String, Vec<u8>)> = None;
    let mut metadata = PaperMetadata::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return multipart_error(e, limit),
        };
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(bytes) => upload = Some((file_name, bytes.to_vec())),
                    Err(e) => return multipart_error(e, limit),
                }
            }
            "title" | "authors" | "venue_year" | "doi_or_arxiv" => {
                let value = match field.text().await {
                    Ok(value) => Some(value),
                    Err(e) => return multipart_error(e, limit),
                };
                match name.as_str() {
                    "title" => metadata.title = value,
                    "authors" => metadata.authors = value,
                    "venue_year" => metadata.venue_year = value,
                    _ => metadata.doi_or_arxiv = value,
                }
            }
            _ => {}
        }
    }

    let Some((file_name, bytes)) = upload else {
        return bad_request("No file uploaded");
    };
    if file_name.is_empty() {
        return bad_request("No file selected");
    }
    let Some(kind) = std::path::Path::new(&file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(SourceKind::from_extension)
    else {
        return bad_request("File type not allowed. Please upload PDF or TXT files.");
    };

    tracing::info!("Summarizing upload '{}' ({} bytes)", file_name, bytes.len());
    match state
        .summarizer
        .summarize_bytes(kind, bytes, metadata.normalized())
        .await
    {
        Ok(summary) => success(summary),
        Err(e) => failure("file", &e),
    }
}

/// POST /api/summarize_url: `{url, metadata?}`.
async fn summarize_url(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> ApiResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return too_large(state.config.max_upload_bytes)
        }
        Err(_) => return bad_request("URL is required"),
    };
    let Some(url) = request.url.filter(|u| !u.trim().is_empty()) else {
        return bad_request("URL is required");
    };

    match state
        .summarizer
        .summarize_source(&url, Some(SourceKind::Url), request.metadata.unwrap_or_default())
        .await
    {
        Ok(summary) => success(summary),
        Err(e) => failure("URL", &e),
    }
}

/// POST /api/summarize_text: `{text, metadata?}`.
async fn summarize_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> ApiResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return too_large(state.config.max_upload_bytes)
        }
        Err(_) => return bad_request("Text is required"),
    };
    let Some(text) = request.text else {
        return bad_request("Text is required");
    };

    match state
        .summarizer
        .summarize_source(&text, Some(SourceKind::Text), request.metadata.unwrap_or_default())
        .await
    {
        Ok(summary) => success(summary),
        Err(e) => failure("text", &e),
    }
}

fn multipart_error(err: MultipartError, limit: usize) -> ApiResponse {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        too_large(limit)
    } else {
        bad_request(format!("Invalid upload: {}", err.body_text()))
    }
}

fn too_large(limit: usize) -> ApiResponse {
    (
        StatusCode::PAYLOAD_TOO_LARGE,
        Json(serde_json::json!({
            "error": format!("File too large. Maximum size is {}MB.", limit / (1024 * 1024)),
        })),
    )
}
