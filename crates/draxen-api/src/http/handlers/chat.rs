//! Chat endpoint: validate, resolve, wrap in the response envelope.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;

use draxen_core::chat::validator;
use draxen_types::chat::ChatResponse;
use draxen_types::error::{ChatError, FieldViolation};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/chat
///
/// The body is taken as raw bytes so that malformed JSON is reported through
/// the same validation envelope as schema violations. Body read failures
/// (oversized payloads) keep their status but still answer with the envelope.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let body = body?;
    let request = validator::parse_chat_request(&body).inspect_err(|err| {
        if let ChatError::InvalidRequest(details) = err {
            let paths: Vec<String> = details.iter().map(FieldViolation::dotted_path).collect();
            tracing::warn!(?paths, "Rejected chat request");
        }
    })?;

    tracing::debug!(
        context_turns = request.context.len(),
        "Chat request accepted"
    );

    let reply = state.resolver.resolve(&request).await?;

    Ok(Json(ChatResponse::reply(reply)))
}
