//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool,
//! each implementing `RemoteTool`. Two dispatch paths share that template:
//! - the rmcp `ToolRouter` (STDIO/TCP), built in `domains/tools/router.rs`
//! - the `ToolRegistry` (HTTP/SSE JSON-RPC), in `domains/tools/registry.rs`
//!
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::api::{RcClient, RemoteApi};
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_router};

/// Instructions sent to clients on initialization.
pub const INSTRUCTIONS: &str = "This server gives access to the Recurse Center API. \
Use search-profiles, get-profile and get-my-profile for people, list-batches and get-batch \
for batches, search-locations to find location ids, and the hub visit tools to read and \
edit hub attendance records.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and exposes
/// the same tools to the hand-written JSON-RPC transports.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry used by the JSON-RPC transports.
    registry: ToolRegistry,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server over the given remote API.
    pub fn new(config: Config, api: Arc<dyn RemoteApi>) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(api.clone()),
            registry: ToolRegistry::new(api),
            config: Arc::new(config),
        }
    }

    /// Create a server talking to the API described by the configuration.
    ///
    /// Fails when the token is missing or the base URL is unusable.
    pub fn from_config(config: Config) -> super::error::Result<Self> {
        let client = RcClient::new(&config.api.base_url, config.api_token()?)?;
        info!("Remote API: {}", client.base_url());
        Ok(Self::new(config, Arc::new(client)))
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    // ========================================================================
    // JSON-RPC Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP/SSE transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP/SSE transport).
    ///
    /// `arguments` must be a JSON object or null. The reply envelope is
    /// returned serialized, failure replies included.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, ToolError> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => JsonObject::new(),
            other => {
                return Err(ToolError::invalid_arguments(
                    name,
                    format!("arguments must be an object, got {}", other),
                ));
            }
        };

        let result = self.registry.call_tool(name, arguments).await?;
        serde_json::to_value(&result).map_err(|e| ToolError::internal(e.to_string()))
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::MockApi;
    use serde_json::json;

    fn server(api: Arc<MockApi>) -> McpServer {
        McpServer::new(Config::default().with_api_token("t"), api)
    }

    #[test]
    fn test_from_config_requires_token() {
        assert!(McpServer::from_config(Config::default()).is_err());
        assert!(McpServer::from_config(Config::default().with_api_token("t")).is_ok());
    }

    #[test]
    fn test_list_tools_shape() {
        let tools = server(MockApi::ok(json!(null))).list_tools();
        assert_eq!(tools.len(), 10);
        for tool in tools {
            assert!(tool["name"].is_string());
            assert_eq!(tool["inputSchema"]["type"], "object");
        }
    }

    #[tokio::test]
    async fn test_call_tool_serializes_envelope() {
        let server = server(MockApi::ok(json!({ "id": 42, "name": "Summer 1" })));
        let reply = server.call_tool("get-batch", json!({ "batch_id": 42 })).await.unwrap();
        assert_eq!(reply["content"][0]["type"], "text");
        assert_eq!(
            reply["content"][0]["text"],
            "{\n  \"id\": 42,\n  \"name\": \"Summer 1\"\n}"
        );
    }

    #[tokio::test]
    async fn test_call_tool_rejects_non_object_arguments() {
        let server = server(MockApi::ok(json!(null)));
        let result = server.call_tool("list-batches", json!([1])).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments { .. })));
    }

    #[test]
    fn test_info_advertises_tools() {
        let info = server(MockApi::ok(json!(null))).get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.server_info.name, "rc-mcp-server");
    }
}
