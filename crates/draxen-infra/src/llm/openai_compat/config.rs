//! Configuration and base-URL presets for OpenAI-compatible providers.

/// Google Gemini's OpenAI-compatible endpoint.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// OpenAI's public API.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for an OpenAI-compatible LLM provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "gemini", "openai").
    pub provider_name: String,
    /// Base URL for the API.
    pub base_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Default model identifier (e.g., "gemini-2.0-flash").
    pub model: String,
}

/// Base URL for a well-known provider name. Unknown names get Gemini.
pub fn preset_base_url(provider_name: &str) -> &'static str {
    match provider_name {
        "openai" => OPENAI_BASE_URL,
        _ => GEMINI_BASE_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_base_url() {
        assert_eq!(preset_base_url("openai"), OPENAI_BASE_URL);
        assert_eq!(preset_base_url("gemini"), GEMINI_BASE_URL);
        assert_eq!(preset_base_url("anything-else"), GEMINI_BASE_URL);
    }
}
