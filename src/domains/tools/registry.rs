//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Dispatch for tool calls coming from the hand-written JSON-RPC
//!   transports (HTTP, SSE)
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use super::definitions::{
    DeleteHubVisitTool, GetBatchTool, GetHubVisitsTool, GetMyProfileTool, GetProfileTool,
    ListBatchesTool, SearchLocationsTool, SearchProfilesTool, UpdateHubVisitNotesTool,
    UpdateHubVisitTool,
};
use super::error::ToolError;
use super::handlers::{RemoteTool, invoke};
use crate::domains::api::RemoteApi;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
#[derive(Clone)]
pub struct ToolRegistry {
    api: Arc<dyn RemoteApi>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by the given remote API.
    pub fn new(api: Arc<dyn RemoteApi>) -> Self {
        Self { api }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            SearchProfilesTool::NAME,
            GetProfileTool::NAME,
            GetMyProfileTool::NAME,
            ListBatchesTool::NAME,
            GetBatchTool::NAME,
            SearchLocationsTool::NAME,
            GetHubVisitsTool::NAME,
            UpdateHubVisitTool::NAME,
            DeleteHubVisitTool::NAME,
            UpdateHubVisitNotesTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both the rmcp router and the JSON-RPC transports list from here.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SearchProfilesTool::to_tool(),
            GetProfileTool::to_tool(),
            GetMyProfileTool::to_tool(),
            ListBatchesTool::to_tool(),
            GetBatchTool::to_tool(),
            SearchLocationsTool::to_tool(),
            GetHubVisitsTool::to_tool(),
            UpdateHubVisitTool::to_tool(),
            DeleteHubVisitTool::to_tool(),
            UpdateHubVisitNotesTool::to_tool(),
        ]
    }

    /// Dispatch a tool call by name.
    ///
    /// Only an unknown name is an error; every known tool answers with a
    /// reply envelope, failures included.
    pub async fn call_tool(&self, name: &str, arguments: JsonObject) -> Result<CallToolResult, ToolError> {
        let api = self.api.clone();
        let result = match name {
            SearchProfilesTool::NAME => invoke::<SearchProfilesTool>(api, arguments).await,
            GetProfileTool::NAME => invoke::<GetProfileTool>(api, arguments).await,
            GetMyProfileTool::NAME => invoke::<GetMyProfileTool>(api, arguments).await,
            ListBatchesTool::NAME => invoke::<ListBatchesTool>(api, arguments).await,
            GetBatchTool::NAME => invoke::<GetBatchTool>(api, arguments).await,
            SearchLocationsTool::NAME => invoke::<SearchLocationsTool>(api, arguments).await,
            GetHubVisitsTool::NAME => invoke::<GetHubVisitsTool>(api, arguments).await,
            UpdateHubVisitTool::NAME => invoke::<UpdateHubVisitTool>(api, arguments).await,
            DeleteHubVisitTool::NAME => invoke::<DeleteHubVisitTool>(api, arguments).await,
            UpdateHubVisitNotesTool::NAME => invoke::<UpdateHubVisitNotesTool>(api, arguments).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        };
        Ok(result)
    }
}
