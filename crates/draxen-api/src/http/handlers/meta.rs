//! Service metadata endpoints and the JSON not-found fallback.

use axum::Json;
use axum::extract::State;
use axum::http::{Method, Uri};
use serde_json::{Value, json};

use crate::http::error::AppError;
use crate::state::AppState;

/// Display name reported by the health probe.
pub const SERVICE_NAME: &str = "Draxen AI";

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment,
    }))
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Draxen AI API",
        "status": "online",
        "endpoints": {
            "health": "/health",
            "chat": "/api/chat",
        },
    }))
}

/// Fallback for unmatched routes and methods.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
