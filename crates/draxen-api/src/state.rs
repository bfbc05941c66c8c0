//! Application state shared by all HTTP handlers.
//!
//! AppState holds the resolver (and the provider behind it) plus the loaded
//! configuration. Both are immutable after startup, so cloning the state per
//! request is just two `Arc` bumps.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use draxen_core::chat::resolver::{ChatResolver, GenerationSettings};
use draxen_infra::llm::create_provider;
use draxen_types::config::{GenerationConfig, ServerConfig};

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ChatResolver>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(resolver: ChatResolver, config: ServerConfig) -> Self {
        Self {
            resolver: Arc::new(resolver),
            config: Arc::new(config),
        }
    }

    /// Wire the production provider from configuration.
    pub fn init(config: ServerConfig, api_key: &SecretString) -> Self {
        let provider = create_provider(&config.generation, api_key);
        let resolver = ChatResolver::new(provider, generation_settings(&config.generation));
        Self::new(resolver, config)
    }
}

/// Translate file/env configuration into per-call resolver settings.
pub fn generation_settings(config: &GenerationConfig) -> GenerationSettings {
    GenerationSettings {
        model: config.model.clone(),
        temperature: config.temperature,
        max_tokens: config.max_tokens,
        timeout: Duration::from_secs(config.request_timeout_secs),
    }
}
