//! Conversation turn, chat request, and response envelope types for Draxen.
//!
//! The client owns the turn history for a conversation and re-sends it on
//! every call; nothing here is persisted by the server.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::error::FieldViolation;
use crate::llm::{Message, MessageRole};

/// Speaker of a conversation turn.
///
/// Narrower than [`MessageRole`]: clients may only submit user and assistant
/// turns. The system instruction is owned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    /// Every accepted role, in the order they are reported in validation messages.
    pub const ALL: [TurnRole; 2] = [TurnRole::User, TurnRole::Assistant];
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    /// Parsing is case-sensitive: the wire format only accepts lower-case roles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(TurnRole::User),
            "assistant" => Ok(TurnRole::Assistant),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

impl From<TurnRole> for MessageRole {
    fn from(role: TurnRole) -> Self {
        match role {
            TurnRole::User => MessageRole::User,
            TurnRole::Assistant => MessageRole::Assistant,
        }
    }
}

/// One message in a conversation, tagged with its speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

impl From<&Turn> for Message {
    fn from(turn: &Turn) -> Self {
        Message {
            role: turn.role.into(),
            content: turn.content.clone(),
        }
    }
}

/// A validated inbound chat call.
///
/// `message` is the newest user input; `context` holds the prior turns in
/// order. Only produced by the request validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub context: Vec<Turn>,
}

impl ChatRequest {
    /// The full conversation with the new message appended as the last user turn.
    pub fn turns(&self) -> Vec<Turn> {
        let mut turns = Vec::with_capacity(self.context.len() + 1);
        turns.extend(self.context.iter().cloned());
        turns.push(Turn::user(self.message.clone()));
        turns
    }
}

/// JSON envelope returned by `POST /api/chat`.
///
/// ```json
/// { "success": true, "response": "..." }
/// { "success": false, "error": "...", "details": [ ... ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Field-level validation failures; only present on invalid requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

impl ChatResponse {
    /// Successful reply.
    pub fn reply(response: impl Into<String>) -> Self {
        Self {
            success: true,
            response: Some(response.into()),
            error: None,
            details: None,
        }
    }

    /// Failure without structured details.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(error.into()),
            details: None,
        }
    }

    /// Failure carrying the validator's field-level violations.
    pub fn invalid(error: impl Into<String>, details: Vec<FieldViolation>) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(error.into()),
            details: Some(details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PathSegment, ViolationCode};

    #[test]
    fn test_turn_role_parse_is_case_sensitive() {
        assert_eq!("user".parse::<TurnRole>().unwrap(), TurnRole::User);
        assert_eq!("assistant".parse::<TurnRole>().unwrap(), TurnRole::Assistant);
        assert!("User".parse::<TurnRole>().is_err());
        assert!("system".parse::<TurnRole>().is_err());
    }

    #[test]
    fn test_turn_role_maps_to_message_role() {
        assert_eq!(MessageRole::from(TurnRole::User), MessageRole::User);
        assert_eq!(MessageRole::from(TurnRole::Assistant), MessageRole::Assistant);
    }

    #[test]
    fn test_turns_appends_message_last() {
        let request = ChatRequest {
            message: "and now?".to_string(),
            context: vec![Turn::user("hi"), Turn::assistant("hello")],
        };

        let turns = request.turns();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0], Turn::user("hi"));
        assert_eq!(turns[1], Turn::assistant("hello"));
        assert_eq!(turns[2], Turn::user("and now?"));
    }

    #[test]
    fn test_chat_request_context_defaults_to_empty() {
        let request: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert!(request.context.is_empty());
    }

    #[test]
    fn test_reply_envelope_shape() {
        let json = serde_json::to_value(ChatResponse::reply("li hwak")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "response": "li hwak" }));
    }

    #[test]
    fn test_failure_envelope_omits_details() {
        let json = serde_json::to_value(ChatResponse::failure("AI Error: boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "error": "AI Error: boom" }));
    }

    #[test]
    fn test_invalid_envelope_carries_details() {
        let violation = FieldViolation::new(
            ViolationCode::TooSmall,
            "String must contain at least 1 character(s)",
            vec![PathSegment::Key("message".to_string())],
        );
        let json = serde_json::to_value(ChatResponse::invalid(
            "Invalid request format",
            vec![violation],
        ))
        .unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Invalid request format");
        assert_eq!(json["details"][0]["code"], "too_small");
        assert_eq!(json["details"][0]["path"], serde_json::json!(["message"]));
    }
}
