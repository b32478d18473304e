//! Test doubles shared by the tool unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::Value;

use crate::domains::api::{ApiError, ApiResult, RemoteApi, RemoteRequest};

/// Recording fake for the remote API with a fixed outcome.
pub struct MockApi {
    outcome: ApiResult<Value>,
    calls: Mutex<Vec<RemoteRequest>>,
}

impl MockApi {
    pub fn ok(data: Value) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(data),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn err(error: ApiError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(error),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RemoteRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn single_call(&self) -> RemoteRequest {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one remote call");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl RemoteApi for MockApi {
    async fn call(&self, request: &RemoteRequest) -> ApiResult<Value> {
        self.calls.lock().unwrap().push(request.clone());
        self.outcome.clone()
    }
}

/// Text of the single content block of a reply.
pub fn reply_text(result: &CallToolResult) -> &str {
    assert_eq!(result.content.len(), 1, "expected a single content block");
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

/// Build an argument object from a JSON literal.
pub fn args(value: Value) -> rmcp::model::JsonObject {
    value.as_object().cloned().expect("arguments must be an object")
}
