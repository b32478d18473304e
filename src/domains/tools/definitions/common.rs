//! Common utilities shared across the Recurse Center tools.
//!
//! Reply formatting helpers and the empty parameter set.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Parameters of tools that take no arguments.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create a success result holding the pretty-printed payload.
///
/// Two-space indentation; the text parses back to exactly `data`.
pub fn json_result(data: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
    success_result(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::reply_text;
    use serde_json::json;

    #[test]
    fn test_json_result_round_trips() {
        let data = json!({ "id": 42, "tags": ["a", "b"], "nested": { "ok": true } });
        let result = json_result(&data);
        assert_eq!(result.content.len(), 1);
        let parsed: Value = serde_json::from_str(reply_text(&result)).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_json_result_null_payload() {
        assert_eq!(reply_text(&json_result(&Value::Null)), "null");
    }

    #[test]
    fn test_error_result_flags_error() {
        let result = error_result("Failed to list batches");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(reply_text(&result), "Failed to list batches");
    }
}
