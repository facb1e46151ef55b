//! HTTP error mapping for API handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lukulasi_core::AppError;
use serde_json::json;
use tracing::error;

/// Wrapper converting [`AppError`] into an HTTP response.
pub struct HttpError(pub AppError);

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, code) = match &self.0 {
            AppError::ContentNotFound => (StatusCode::NOT_FOUND, self.0.to_string(), None),
            AppError::BadRequest(_) | AppError::SelectionTooLong => {
                (StatusCode::BAD_REQUEST, self.0.to_string(), None)
            }
            AppError::Document(err) => {
                (StatusCode::BAD_REQUEST, err.to_string(), Some(err.code()))
            }
            AppError::TranslationFailed | AppError::ProviderUnavailable(_) => {
                (StatusCode::BAD_GATEWAY, "Translation error".to_string(), None)
            }
            AppError::Storage(_) | AppError::StorageMessage(_) | AppError::Serialization(_) => {
                error!("internal error: {}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = match code {
            Some(code) => json!({ "error": message, "code": code }),
            None => json!({ "error": message }),
        };
        (status, Json(body)).into_response()
    }
}
