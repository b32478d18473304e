//! Shared handler template for remote-backed tools.
//!
//! Every tool in this server follows the same shape: validated parameters
//! become one [`RemoteRequest`], the request goes through the [`RemoteApi`]
//! adapter, and the outcome becomes one text block. A tool therefore only
//! declares its parameters, how they map onto a request, and what to say
//! when the call fails. [`RemoteTool`] captures that; [`invoke`] and
//! [`RemoteTool::create_route`] supply the rest.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::definitions::common::{error_result, json_result};
use super::error::ToolError;
use super::schema::{validate_arguments, validator_for, without_nulls};
use crate::domains::api::{ApiResult, RemoteApi, RemoteRequest};

/// A tool backed by exactly one remote API call.
pub trait RemoteTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Parameter struct; its derived JSON Schema is the tool's input schema.
    type Params: DeserializeOwned + JsonSchema + Send + Sync + 'static;

    /// Map validated parameters onto the remote request.
    fn remote_request(params: &Self::Params) -> ApiResult<RemoteRequest>;

    /// One-line message shown when the remote call produced no data.
    fn failure_message(params: &Self::Params) -> String;

    /// Turn the adapter outcome into the reply envelope.
    fn render(params: &Self::Params, outcome: ApiResult<Value>) -> CallToolResult {
        match outcome {
            Ok(data) => json_result(&data),
            Err(e) => {
                warn!(tool = Self::NAME, "Remote call failed: {}", e);
                error_result(&Self::failure_message(params))
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Validate raw arguments against the input schema, then deserialize.
    fn parse_arguments(arguments: JsonObject) -> Result<Self::Params, ToolError> {
        let validator = validator_for::<Self::Params>().map_err(ToolError::internal)?;
        let arguments = without_nulls(arguments);
        validate_arguments(&validator, &arguments)
            .map_err(|v| ToolError::from_violation(Self::NAME, v))?;

        serde_json::from_value(Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(Self::NAME, e.to_string()))
    }

    /// Create a ToolRoute for the rmcp-driven transports (STDIO/TCP).
    fn create_route<S>(api: Arc<dyn RemoteApi>) -> ToolRoute<S>
    where
        Self: Sized,
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let api = api.clone();
            async move { Ok::<_, McpError>(invoke::<Self>(api, args).await) }.boxed()
        })
    }
}

/// Run one tool invocation end to end.
///
/// Invalid arguments never reach the adapter; they come back as an error
/// reply naming the violation. That includes values that cannot be a path
/// segment.
#[instrument(skip_all, fields(tool = T::NAME))]
pub async fn invoke<T: RemoteTool>(api: Arc<dyn RemoteApi>, arguments: JsonObject) -> CallToolResult {
    let params = match T::parse_arguments(arguments) {
        Ok(params) => params,
        Err(e) => {
            warn!("Rejected arguments: {}", e);
            return error_result(&e.to_string());
        }
    };

    let request = match T::remote_request(&params).and_then(|r| r.path.check().map(|_| r)) {
        Ok(request) => request,
        Err(e) => {
            let e = ToolError::invalid_arguments(T::NAME, e.to_string());
            warn!("Rejected arguments: {}", e);
            return error_result(&e.to_string());
        }
    };

    info!("Calling {} {:?}", request.method, request.path.segments());
    let outcome = api.call(&request).await;
    T::render(&params, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::api::{ApiError, ApiPath};
    use crate::domains::tools::testing::{MockApi, reply_text};
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Deserialize, Serialize, JsonSchema)]
    struct EchoParams {
        #[schemars(description = "Required word")]
        word: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        #[schemars(range(min = 1, max = 3))]
        times: Option<u32>,
    }

    struct EchoTool;

    impl RemoteTool for EchoTool {
        const NAME: &'static str = "echo";
        const DESCRIPTION: &'static str = "Echo through the remote API";
        type Params = EchoParams;

        fn remote_request(params: &EchoParams) -> ApiResult<RemoteRequest> {
            RemoteRequest::get(ApiPath::new("echo")).with_params(params)
        }

        fn failure_message(params: &EchoParams) -> String {
            format!("Failed to echo {}", params.word)
        }
    }

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = EchoTool::to_tool();
        assert_eq!(tool.name, "echo");
        assert_eq!(tool.description.as_deref(), Some("Echo through the remote API"));
        let required = tool.input_schema.get("required").and_then(|r| r.as_array()).unwrap();
        assert!(required.contains(&json!("word")));
    }

    #[tokio::test]
    async fn test_invoke_success_renders_pretty_json() {
        let api = MockApi::ok(json!({ "word": "hi" }));
        let result = invoke::<EchoTool>(api.clone(), args(json!({ "word": "hi", "times": 2 }))).await;

        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(reply_text(&result), "{\n  \"word\": \"hi\"\n}");

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(Value::Object(calls[0].params.clone()), json!({ "word": "hi", "times": 2 }));
    }

    #[tokio::test]
    async fn test_invoke_failure_uses_tool_message() {
        let api = MockApi::err(ApiError::from_status(500, "boom"));
        let result = invoke::<EchoTool>(api, args(json!({ "word": "hi" }))).await;
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(reply_text(&result), "Failed to echo hi");
    }

    #[tokio::test]
    async fn test_invalid_arguments_skip_remote_call() {
        let api = MockApi::ok(json!(null));

        let missing = invoke::<EchoTool>(api.clone(), args(json!({}))).await;
        assert!(missing.is_error.unwrap_or(false));
        assert!(reply_text(&missing).contains("word"));

        let out_of_range = invoke::<EchoTool>(api.clone(), args(json!({ "word": "a", "times": 4 }))).await;
        assert!(out_of_range.is_error.unwrap_or(false));
        assert!(reply_text(&out_of_range).contains("Invalid arguments for echo"));

        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_route_carries_tool_metadata() {
        struct TestServer;
        let api = MockApi::ok(json!([]));
        let router = rmcp::handler::server::tool::ToolRouter::<TestServer>::new()
            .with_route(EchoTool::create_route(api));
        let tools = router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "echo");
    }
}
