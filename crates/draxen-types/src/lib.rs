//! Shared domain types for Draxen.
//!
//! This crate contains the core domain types used across the Draxen server:
//! conversation turns, the chat request/response envelope, LLM request shapes,
//! server configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
