//! Inbound chat request validation.
//!
//! Accepts an arbitrary JSON payload and either produces a [`ChatRequest`] or
//! a `ChatError::InvalidRequest` listing every field-level violation found.
//! Messages mirror the wording clients already display (`"Required"`,
//! `"Expected string, received number"`, ...).

use serde_json::{Map, Value};

use draxen_types::chat::{ChatRequest, Turn, TurnRole};
use draxen_types::error::{ChatError, FieldViolation, PathSegment, ViolationCode};

/// Parse a raw request body and validate it.
///
/// An empty body is treated as an empty object, so it fails on the missing
/// `message` field rather than on JSON syntax.
pub fn parse_chat_request(body: &[u8]) -> Result<ChatRequest, ChatError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return validate_chat_request(&Value::Object(Map::new()));
    }

    let payload: Value = serde_json::from_slice(body).map_err(|e| {
        ChatError::InvalidRequest(vec![FieldViolation::new(
            ViolationCode::InvalidJson,
            format!("Request body is not valid JSON: {e}"),
            Vec::new(),
        )])
    })?;

    validate_chat_request(&payload)
}

/// Validate an already-parsed JSON payload.
pub fn validate_chat_request(payload: &Value) -> Result<ChatRequest, ChatError> {
    let Some(object) = payload.as_object() else {
        return Err(ChatError::InvalidRequest(vec![type_violation(
            "object",
            payload,
            Vec::new(),
        )]));
    };

    let mut violations = Vec::new();

    let message = check_message(object.get("message"), &mut violations);
    let context = match object.get("context") {
        None => Some(Vec::new()),
        Some(value) => check_context(value, &mut violations),
    };

    match (message, context) {
        (Some(message), Some(context)) if violations.is_empty() => {
            Ok(ChatRequest { message, context })
        }
        _ => Err(ChatError::InvalidRequest(violations)),
    }
}

fn check_message(value: Option<&Value>, violations: &mut Vec<FieldViolation>) -> Option<String> {
    let path = vec![key("message")];
    match value {
        None => {
            violations.push(required(path));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            violations.push(FieldViolation::new(
                ViolationCode::TooSmall,
                "String must contain at least 1 character(s)",
                path,
            ));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            violations.push(type_violation("string", other, path));
            None
        }
    }
}

fn check_context(value: &Value, violations: &mut Vec<FieldViolation>) -> Option<Vec<Turn>> {
    let Some(items) = value.as_array() else {
        violations.push(type_violation("array", value, vec![key("context")]));
        return None;
    };

    let before = violations.len();
    let turns: Vec<Turn> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| check_turn(index, item, violations))
        .collect();

    (violations.len() == before).then_some(turns)
}

fn check_turn(index: usize, item: &Value, violations: &mut Vec<FieldViolation>) -> Option<Turn> {
    let base = vec![key("context"), PathSegment::Index(index)];

    let Some(fields) = item.as_object() else {
        violations.push(type_violation("object", item, base));
        return None;
    };

    let role_path = with(&base, "role");
    let role = match fields.get("role") {
        None => {
            violations.push(required(role_path));
            None
        }
        Some(Value::String(s)) => match s.parse::<TurnRole>() {
            Ok(role) => Some(role),
            Err(_) => {
                violations.push(FieldViolation::new(
                    ViolationCode::InvalidEnumValue,
                    format!("Invalid enum value. Expected {}, received '{s}'", expected_roles()),
                    role_path,
                ));
                None
            }
        },
        Some(other) => {
            violations.push(FieldViolation::new(
                ViolationCode::InvalidType,
                format!("Expected {}, received {}", expected_roles(), json_type(other)),
                role_path,
            ));
            None
        }
    };

    let content_path = with(&base, "content");
    let content = match fields.get("content") {
        None => {
            violations.push(required(content_path));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            violations.push(type_violation("string", other, content_path));
            None
        }
    };

    Some(Turn {
        role: role?,
        content: content?,
    })
}

fn expected_roles() -> String {
    TurnRole::ALL
        .iter()
        .map(|r| format!("'{r}'"))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn key(name: &str) -> PathSegment {
    PathSegment::Key(name.to_string())
}

fn with(base: &[PathSegment], name: &str) -> Vec<PathSegment> {
    let mut path = base.to_vec();
    path.push(key(name));
    path
}

fn required(path: Vec<PathSegment>) -> FieldViolation {
    FieldViolation::new(ViolationCode::InvalidType, "Required", path)
}

fn type_violation(expected: &str, actual: &Value, path: Vec<PathSegment>) -> FieldViolation {
    FieldViolation::new(
        ViolationCode::InvalidType,
        format!("Expected {expected}, received {}", json_type(actual)),
        path,
    )
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn violations(payload: Value) -> Vec<FieldViolation> {
        match validate_chat_request(&payload) {
            Err(ChatError::InvalidRequest(v)) => v,
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_message_only_defaults_empty_context() {
        let request = validate_chat_request(&json!({ "message": "salam" })).unwrap();
        assert_eq!(request.message, "salam");
        assert!(request.context.is_empty());
    }

    #[test]
    fn test_message_is_not_trimmed() {
        let request = validate_chat_request(&json!({ "message": "  " })).unwrap();
        assert_eq!(request.message, "  ");
    }

    #[test]
    fn test_context_turns_preserved_in_order() {
        let request = validate_chat_request(&json!({
            "message": "and you?",
            "context": [
                { "role": "user", "content": "hi" },
                { "role": "assistant", "content": "hello" }
            ]
        }))
        .unwrap();
        assert_eq!(request.context, vec![Turn::user("hi"), Turn::assistant("hello")]);
    }

    #[test]
    fn test_missing_message_is_required() {
        let v = violations(json!({}));
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].code, ViolationCode::InvalidType);
        assert_eq!(v[0].message, "Required");
        assert_eq!(v[0].path, vec![key("message")]);
    }

    #[test]
    fn test_empty_message_is_too_small() {
        let v = violations(json!({ "message": "" }));
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].code, ViolationCode::TooSmall);
    }

    #[test]
    fn test_non_string_message() {
        let v = violations(json!({ "message": 42 }));
        assert_eq!(v[0].message, "Expected string, received number");
    }

    #[test]
    fn test_unknown_role_is_invalid_enum_value() {
        let v = violations(json!({
            "message": "hi",
            "context": [{ "role": "system", "content": "obey" }]
        }));
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].code, ViolationCode::InvalidEnumValue);
        assert_eq!(
            v[0].message,
            "Invalid enum value. Expected 'user' | 'assistant', received 'system'"
        );
        assert_eq!(v[0].dotted_path(), "context.0.role");
    }

    #[test]
    fn test_all_violations_are_collected() {
        let v = violations(json!({
            "message": "",
            "context": [
                { "role": "user", "content": "ok" },
                { "role": "robot", "content": 7 },
                "not a turn"
            ]
        }));
        let paths: Vec<String> = v.iter().map(FieldViolation::dotted_path).collect();
        assert_eq!(paths, vec!["message", "context.1.role", "context.1.content", "context.2"]);
    }

    #[test]
    fn test_context_must_be_array() {
        let v = violations(json!({ "message": "hi", "context": null }));
        assert_eq!(v[0].message, "Expected array, received null");
        assert_eq!(v[0].dotted_path(), "context");
    }

    #[test]
    fn test_body_must_be_object() {
        let v = violations(json!(["message"]));
        assert_eq!(v[0].message, "Expected object, received array");
        assert!(v[0].path.is_empty());
    }

    #[test]
    fn test_parse_empty_body_reports_missing_message() {
        match parse_chat_request(b"") {
            Err(ChatError::InvalidRequest(v)) => assert_eq!(v[0].message, "Required"),
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_malformed_json() {
        match parse_chat_request(b"{\"message\": ") {
            Err(ChatError::InvalidRequest(v)) => {
                assert_eq!(v.len(), 1);
                assert_eq!(v[0].code, ViolationCode::InvalidJson);
            }
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_valid_body() {
        let request = parse_chat_request(br#"{"message":"chkon nta"}"#).unwrap();
        assert_eq!(request.message, "chkon nta");
    }
}
