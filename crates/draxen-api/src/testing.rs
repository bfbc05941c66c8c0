//! Test doubles shared by the HTTP tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::{Body, to_bytes};
use axum::http::Request;
use axum::http::header::CONTENT_TYPE;
use axum::response::Response;
use serde_json::Value;

use draxen_core::chat::resolver::{ChatResolver, GenerationSettings};
use draxen_core::llm::box_provider::BoxLlmProvider;
use draxen_core::llm::provider::LlmProvider;
use draxen_types::config::ServerConfig;
use draxen_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};

use crate::state::AppState;

#[derive(Clone)]
enum Outcome {
    Reply(String),
    Fail(String),
    Hang,
}

/// Provider that answers with a fixed text, fails, or never answers, and
/// counts calls.
#[derive(Clone)]
pub struct CountingProvider {
    outcome: Outcome,
    calls: Arc<AtomicUsize>,
}

impl CountingProvider {
    fn with(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::with(Outcome::Reply(text.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::with(Outcome::Fail(message.to_string()))
    }

    pub fn hanging() -> Self {
        Self::with(Outcome::Hang)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> AppState {
        let resolver = ChatResolver::new(
            BoxLlmProvider::new(self.clone()),
            GenerationSettings::default(),
        );
        AppState::new(resolver, ServerConfig::default())
    }
}

impl LlmProvider for CountingProvider {
    fn name(&self) -> &str {
        "counting"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Outcome::Reply(text) => Ok(CompletionResponse {
                id: format!("resp-{}", self.calls()),
                content: text.clone(),
                model: request.model.clone(),
                stop_reason: StopReason::EndTurn,
                usage: Usage::default(),
            }),
            Outcome::Fail(message) => Err(LlmError::Provider {
                message: message.clone(),
            }),
            Outcome::Hang => std::future::pending().await,
        }
    }
}

const BODY_LIMIT: usize = 1_048_576;

/// Build a JSON POST request.
pub fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .expect("build request")
}

/// Build a bodyless request.
pub fn empty(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn json_body(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("parse json")
}
