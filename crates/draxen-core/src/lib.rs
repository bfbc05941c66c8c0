//! Business logic for Draxen.
//!
//! This crate defines the `LlmProvider` port that the infrastructure layer
//! implements, plus the chat path built on top of it: request validation,
//! the canned-reply override table, and the response resolver. It depends
//! only on `draxen-types` -- never on `draxen-infra` or any network crate.

pub mod chat;
pub mod llm;
