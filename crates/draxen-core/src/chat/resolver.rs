//! Chat response resolver.
//!
//! ChatResolver answers a validated [`ChatRequest`] with exactly one reply:
//! a canned string from the override table, or the text of a single
//! completion from the configured provider. Each call builds its own
//! `CompletionRequest` from the caller-supplied history; nothing is kept
//! between calls, so any instance can serve any request.

use std::time::Duration;

use tracing::{Instrument, debug, error, info_span};

use draxen_types::chat::ChatRequest;
use draxen_types::error::ChatError;
use draxen_types::llm::{CompletionRequest, LlmError, Message};

use crate::llm::box_provider::BoxLlmProvider;

use super::overrides;
use super::persona::SYSTEM_PROMPT;

/// Fallback cause when the provider fails without saying why.
pub const UNKNOWN_ERROR: &str = "Unknown AI error occurred";

/// How a request will be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyStrategy {
    /// Answer verbatim from the override table; no provider call.
    Canned(&'static str),
    /// Forward the conversation to the provider.
    Generate,
}

impl ReplyStrategy {
    /// Pick the strategy for an incoming message.
    pub fn select(message: &str) -> Self {
        match overrides::lookup(message) {
            Some(reply) => ReplyStrategy::Canned(reply),
            None => ReplyStrategy::Generate,
        }
    }
}

/// Per-call generation parameters.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// Upper bound on one provider call.
    pub timeout: Duration,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: String::new(),
            temperature: 0.7,
            max_tokens: 1024,
            timeout: Duration::from_secs(60),
        }
    }
}

/// Resolves chat requests against the override table and the provider.
pub struct ChatResolver {
    provider: BoxLlmProvider,
    settings: GenerationSettings,
}

impl ChatResolver {
    pub fn new(provider: BoxLlmProvider, settings: GenerationSettings) -> Self {
        Self { provider, settings }
    }

    /// Name of the backing provider, for diagnostics.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Produce the single reply for `request`.
    pub async fn resolve(&self, request: &ChatRequest) -> Result<String, ChatError> {
        match ReplyStrategy::select(&request.message) {
            ReplyStrategy::Canned(reply) => {
                debug!(reply, "Answered from override table");
                Ok(reply.to_string())
            }
            ReplyStrategy::Generate => self.generate(request).await,
        }
    }

    /// Build the outbound request: persona + history + the new user message.
    pub fn build_request(&self, request: &ChatRequest) -> CompletionRequest {
        CompletionRequest {
            model: self.settings.model.clone(),
            messages: request.turns().iter().map(Message::from).collect(),
            system: Some(SYSTEM_PROMPT.to_string()),
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
        }
    }

    async fn generate(&self, request: &ChatRequest) -> Result<String, ChatError> {
        let completion = self.build_request(request);

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %completion.model,
            gen_ai.request.max_tokens = completion.max_tokens,
            gen_ai.request.temperature = ?completion.temperature,
            gen_ai.request.turns = completion.messages.len(),
        );

        let call = self.provider.complete(&completion).instrument(span);
        let result = match tokio::time::timeout(self.settings.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout(self.settings.timeout.as_secs())),
        };

        match result {
            Ok(response) => {
                debug!(
                    response_id = %response.id,
                    stop_reason = %response.stop_reason,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "Generation complete"
                );
                Ok(response.content)
            }
            Err(err) => {
                error!(provider = self.provider.name(), error = %err, "Generation failed");
                Err(generation_failed(&err))
            }
        }
    }
}

/// Translate a provider fault into the caller-facing cause text.
pub fn generation_failed(err: &LlmError) -> ChatError {
    let cause = match err {
        LlmError::Provider { message } if message.trim().is_empty() => UNKNOWN_ERROR.to_string(),
        LlmError::Provider { message } => format!("AI Error: {message}"),
        other => format!("AI Error: {other}"),
    };
    ChatError::GenerationFailed(cause)
}
