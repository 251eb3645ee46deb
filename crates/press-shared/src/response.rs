//! Error body returned by the backend on non-2xx answers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{"detail": ...}` error body.
///
/// `detail` is a plain message for application errors but a list of
/// field errors for request validation failures, so it is kept untyped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// Parse an error body, `None` when it is not a JSON object.
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }

    /// The human-readable message, when `detail` is a non-empty string.
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}
