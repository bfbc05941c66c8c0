//! The chat-forwarding path.
//!
//! `validator` turns an untrusted JSON body into a [`ChatRequest`], and
//! `resolver` answers it from the `overrides` table or the external provider.
//!
//! [`ChatRequest`]: draxen_types::chat::ChatRequest

pub mod overrides;
pub mod persona;
pub mod resolver;
pub mod validator;
