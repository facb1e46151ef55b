//! Content library HTTP handlers.

use crate::error::HttpError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use lukulasi_core::content::{ContentItem, ContentMeta};

/// List all content metadata, sorted by difficulty then title.
pub async fn list_content(State(state): State<AppState>) -> Json<Vec<ContentMeta>> {
    Json(state.library.list())
}

/// Fetch one content item with its full text.
///
/// # Errors
/// Returns 404 when the id is unknown or invalid.
pub async fn get_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContentItem>, HttpError> {
    Ok(Json(state.library.get(&id)?))
}
