//! Response envelope
//!
//! Every handler outcome is shaped into the same JSON envelope:
//! `{ "action": ..., "message": ..., "success": ..., "data": ... }`.
//! Failures carry `data: null` and the error message; the action tag always
//! reflects the operation that was attempted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Operation classification carried in every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Read,
    Insert,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "READ",
            Action::Insert => "INSERT",
            Action::Update => "UPDATE",
            Action::Delete => "DELETE",
        }
    }
}

/// Uniform response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub action: Action,
    pub message: String,
    pub success: bool,
    pub data: Value,
}

impl Response {
    /// Successful outcome carrying a result payload.
    pub fn success(action: Action, message: impl Into<String>, data: Value) -> Self {
        Self {
            action,
            message: message.into(),
            success: true,
            data,
        }
    }

    /// Failed outcome; the payload is always null.
    pub fn failure(action: Action, message: impl Into<String>) -> Self {
        Self {
            action,
            message: message.into(),
            success: false,
            data: Value::Null,
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("Response serialization cannot fail")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let resp = Response::success(Action::Read, "1 record", json!([{"id": 1}]));
        let json = resp.to_json();

        assert!(json.contains("\"action\":\"READ\""));
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"data\":[{\"id\":1}]"));
    }

    #[test]
    fn test_failure_envelope_has_null_data() {
        let resp = Response::failure(Action::Delete, "record 9 not found");
        let json = resp.to_json();

        assert!(json.contains("\"action\":\"DELETE\""));
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"data\":null"));
        assert!(json.contains("record 9 not found"));
    }

    #[test]
    fn test_action_wire_names() {
        assert_eq!(serde_json::to_value(Action::Insert).unwrap(), json!("INSERT"));
        assert_eq!(serde_json::to_value(Action::Update).unwrap(), json!("UPDATE"));
    }
}
