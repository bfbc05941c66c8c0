//! Application error type mapping to HTTP status codes and the chat envelope.

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use draxen_types::chat::ChatResponse;
use draxen_types::error::ChatError;

/// Error text reported for every validation failure; details carry the specifics.
pub const INVALID_REQUEST_FORMAT: &str = "Invalid request format";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat path errors (validation or generation).
    Chat(ChatError),
    /// The request body could not be read (e.g. over the size limit).
    Body(BytesRejection),
    /// No route matched.
    NotFound { method: String, path: String },
    /// Unexpected fault (e.g. a handler panic).
    Internal(String),
}

impl From<BytesRejection> for AppError {
    fn from(e: BytesRejection) -> Self {
        AppError::Body(e)
    }
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Chat(ChatError::InvalidRequest(details)) => (
                StatusCode::BAD_REQUEST,
                Json(ChatResponse::invalid(INVALID_REQUEST_FORMAT, details)),
            )
                .into_response(),
            AppError::Chat(ChatError::GenerationFailed(cause)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatResponse::failure(cause)),
            )
                .into_response(),
            AppError::Body(rejection) => {
                tracing::warn!(status = %rejection.status(), "Unreadable request body: {rejection}");
                (
                    rejection.status(),
                    Json(ChatResponse::failure(rejection.body_text())),
                )
                    .into_response()
            }
            AppError::NotFound { method, path } => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "success": false,
                    "error": "Not Found",
                    "message": format!("Cannot {method} {path}"),
                })),
            )
                .into_response(),
            AppError::Internal(detail) => {
                tracing::error!(%detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ChatResponse::failure("Internal Server Error")),
                )
                    .into_response()
            }
        }
    }
}
