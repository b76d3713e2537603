//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It
//! implements `axum::response::IntoResponse` to produce `{ "error": message }`
//! bodies with the matching status code. Messages are human readable only;
//! no machine codes are exposed.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use chistes_storage::StorageError;

/// Client-facing message for a joke number with no stored record.
pub const JOKE_NOT_FOUND: &str = "Chiste no encontrado.";

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or invalid input (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No matching record (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Upstream or storage failure (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// Logs `cause` and returns a 500 that only carries `message`.
    ///
    /// Upstream and storage details stay in the operational log.
    pub fn internal(message: &str, cause: impl fmt::Display) -> Self {
        tracing::error!(error = %cause, "{}", message);
        ApiError::InternalError(message.to_string())
    }

    /// Maps a storage failure, keeping not-found and empty-text as client
    /// errors and hiding everything else behind `message`.
    pub fn from_storage(message: &str, err: StorageError) -> Self {
        match err {
            StorageError::JokeNotFound(_) => ApiError::NotFound(JOKE_NOT_FOUND.to_string()),
            StorageError::EmptyText => {
                ApiError::BadRequest("El campo \"texto\" es obligatorio.".to_string())
            }
            other => ApiError::internal(message, other),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::InternalError(msg) => {
                msg
            }
        };
        if status.is_client_error() {
            tracing::debug!(%status, %message, "request rejected");
        }

        (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
    }
}
