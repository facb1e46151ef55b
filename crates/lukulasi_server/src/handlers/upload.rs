//! PDF upload HTTP handler.

use crate::error::HttpError;
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;
use lukulasi_core::AppError;
use serde::Serialize;

/// Extraction result returned to the client.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub text: String,
    pub page_count: usize,
}

fn is_pdf_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/pdf"))
        .unwrap_or(false)
}

/// Accept a raw PDF body and return its extracted, reformatted text.
///
/// # Errors
/// Returns 400 with a machine-readable `code` for each extraction failure
/// kind, or a plain 400 for non-PDF payloads.
pub async fn upload_pdf(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UploadResponse>, HttpError> {
    if !is_pdf_content_type(&headers) {
        return Err(AppError::BadRequest(
            "Invalid file type. Only PDF files are allowed.".to_string(),
        )
        .into());
    }
    if body.is_empty() {
        return Err(AppError::BadRequest("No file provided".to_string()).into());
    }

    // Parsing is CPU-bound; keep it off the async worker threads.
    let extractor = state.extractor.clone();
    let document = tokio::task::spawn_blocking(move || extractor.extract(&body))
        .await
        .map_err(|err| AppError::StorageMessage(format!("extraction task failed: {}", err)))?
        .map_err(AppError::from)?;

    Ok(Json(UploadResponse {
        text: document.text,
        page_count: document.page_count,
    }))
}
