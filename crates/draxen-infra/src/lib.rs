//! Infrastructure layer for Draxen.
//!
//! Contains the concrete [`LlmProvider`] used in production (any
//! OpenAI-compatible endpoint, Gemini by default) and the configuration
//! loader that reads `draxen.toml` and the process environment.
//!
//! [`LlmProvider`]: draxen_core::llm::provider::LlmProvider

pub mod config;
pub mod llm;
