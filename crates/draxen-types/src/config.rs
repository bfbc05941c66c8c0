//! Server configuration types for Draxen.
//!
//! `ServerConfig` represents the top-level `draxen.toml`. Every field has a
//! default so an empty or absent file yields a runnable local setup.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Draxen server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Preferred port; the next free port is used if this one is taken.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment name, reported by `/health`.
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Browser origins allowed by CORS.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Settings for the external text-generation call.
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Settings for the external text-generation provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Provider preset name ("gemini", "openai").
    #[serde(default = "default_provider_name")]
    pub provider_name: String,

    /// Override the preset's base URL (any OpenAI-compatible endpoint).
    #[serde(default)]
    pub base_url: Option<String>,

    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Upper bound on a single generation call, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    ["localhost", "127.0.0.1"]
        .iter()
        .flat_map(|host| (5173..=5175).map(move |port| format!("http://{host}:{port}")))
        .collect()
}

fn default_provider_name() -> String {
    "gemini".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            allowed_origins: default_allowed_origins(),
            generation: GenerationConfig::default(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider_name: default_provider_name(),
            base_url: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
