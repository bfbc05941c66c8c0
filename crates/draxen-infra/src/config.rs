//! Configuration loader for Draxen.
//!
//! Reads `draxen.toml` and deserializes it into [`ServerConfig`]. Falls back
//! to defaults when the file is missing or malformed, then layers the
//! process environment on top (`AI_MODEL`, `DRAXEN_ENV`/`NODE_ENV`, and the
//! provider API key).

use std::path::Path;

use secrecy::SecretString;

use draxen_types::config::ServerConfig;

/// Errors that prevent the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    MissingApiKey(&'static str),
}

/// Load server configuration from `path`.
///
/// - If the file does not exist, returns [`ServerConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_server_config(path: &Path) -> ServerConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return ServerConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ServerConfig::default();
        }
    };

    match toml::from_str::<ServerConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ServerConfig::default()
        }
    }
}

/// Apply environment overrides to a loaded config.
///
/// `env` is a lookup function so callers (and tests) control the source;
/// pass `|k| std::env::var(k).ok()` in production. Empty values are ignored.
pub fn apply_env_overrides<F>(mut config: ServerConfig, env: F) -> ServerConfig
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    if let Some(model) = get("AI_MODEL") {
        config.generation.model = model;
    }
    if let Some(environment) = get("DRAXEN_ENV").or_else(|| get("NODE_ENV")) {
        config.environment = environment;
    }
    config
}

/// Environment variable holding the API key for a provider preset.
pub fn api_key_var(provider_name: &str) -> &'static str {
    match provider_name {
        "gemini" => "GOOGLE_API_KEY",
        "openai" => "OPENAI_API_KEY",
        _ => "DRAXEN_API_KEY",
    }
}

/// Resolve the provider API key from the environment.
///
/// # Errors
///
/// Returns [`ConfigError::MissingApiKey`] if the variable is unset or blank.
pub fn resolve_api_key<F>(provider_name: &str, env: F) -> Result<SecretString, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = api_key_var(provider_name);
    env(var)
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
        .ok_or(ConfigError::MissingApiKey(var))
}
