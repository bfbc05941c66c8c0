//! LLM provider implementations.
//!
//! Contains the concrete implementation of the [`LlmProvider`] trait defined
//! in `draxen-core`, and a factory ([`create_provider`]) that constructs it
//! from a [`GenerationConfig`].
//!
//! [`LlmProvider`]: draxen_core::llm::provider::LlmProvider

pub mod openai_compat;

use secrecy::{ExposeSecret, SecretString};

use draxen_core::llm::box_provider::BoxLlmProvider;
use draxen_types::config::GenerationConfig;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::{OpenAiCompatConfig, preset_base_url};

/// Create a [`BoxLlmProvider`] from a [`GenerationConfig`].
///
/// An explicit `base_url` wins; otherwise the base URL is inferred from the
/// provider name for well-known providers, defaulting to Gemini.
pub fn create_provider(config: &GenerationConfig, api_key: &SecretString) -> BoxLlmProvider {
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| preset_base_url(&config.provider_name).to_string());

    let provider = OpenAiCompatibleProvider::new(OpenAiCompatConfig {
        provider_name: config.provider_name.clone(),
        base_url,
        api_key: api_key.expose_secret().to_string(),
        model: config.model.clone(),
    });
    BoxLlmProvider::new(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SecretString {
        SecretString::from("test-key".to_string())
    }

    #[test]
    fn test_create_provider_gemini_default() {
        let provider = create_provider(&GenerationConfig::default(), &key());
        assert_eq!(provider.name(), "gemini");
    }

    #[test]
    fn test_create_provider_openai_by_name() {
        let config = GenerationConfig {
            provider_name: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            ..GenerationConfig::default()
        };
        let provider = create_provider(&config, &key());
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn test_create_provider_with_base_url() {
        let config = GenerationConfig {
            provider_name: "local-proxy".to_string(),
            base_url: Some("http://localhost:8080/v1".to_string()),
            ..GenerationConfig::default()
        };
        let provider = create_provider(&config, &key());
        assert_eq!(provider.name(), "local-proxy");
    }
}
