//! LlmProvider trait definition.
//!
//! This is the seam between the chat resolver and the external generation
//! service. Uses RPITIT for `complete`, so implementations are plain
//! `async fn`s; `BoxLlmProvider` adds dynamic dispatch on top.

use draxen_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for text-generation backends (Gemini, OpenAI, test doubles).
///
/// Implementations live in draxen-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini", "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
