use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while answering a chat request.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The inbound payload failed validation. Never reaches the resolver.
    #[error("invalid request: {} violation(s)", .0.len())]
    InvalidRequest(Vec<FieldViolation>),

    /// The external generation call failed or returned unusable output.
    #[error("{0}")]
    GenerationFailed(String),
}

/// Machine-readable category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// A value was missing or had the wrong JSON type.
    InvalidType,
    /// A string was not one of the accepted literals.
    InvalidEnumValue,
    /// A string was shorter than allowed.
    TooSmall,
    /// The body could not be parsed as JSON at all.
    InvalidJson,
}

/// One step in the location of a violation inside the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(i) => write!(f, "{i}"),
            PathSegment::Key(k) => write!(f, "{k}"),
        }
    }
}

/// A single field-level validation failure, reported in the `details` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub code: ViolationCode,
    pub message: String,
    pub path: Vec<PathSegment>,
}

impl FieldViolation {
    pub fn new(code: ViolationCode, message: impl Into<String>, path: Vec<PathSegment>) -> Self {
        Self {
            code,
            message: message.into(),
            path,
        }
    }

    /// Dotted rendering of the path for log lines (e.g. `context.0.role`).
    pub fn dotted_path(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}
