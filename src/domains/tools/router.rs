//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter used by the rmcp-driven transports
//! (STDIO/TCP). Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    DeleteHubVisitTool, GetBatchTool, GetHubVisitsTool, GetMyProfileTool, GetProfileTool,
    ListBatchesTool, SearchLocationsTool, SearchProfilesTool, UpdateHubVisitNotesTool,
    UpdateHubVisitTool,
};
use super::handlers::RemoteTool;
use crate::domains::api::RemoteApi;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(api: Arc<dyn RemoteApi>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SearchProfilesTool::create_route(api.clone()))
        .with_route(GetProfileTool::create_route(api.clone()))
        .with_route(GetMyProfileTool::create_route(api.clone()))
        .with_route(ListBatchesTool::create_route(api.clone()))
        .with_route(GetBatchTool::create_route(api.clone()))
        .with_route(SearchLocationsTool::create_route(api.clone()))
        .with_route(GetHubVisitsTool::create_route(api.clone()))
        .with_route(UpdateHubVisitTool::create_route(api.clone()))
        .with_route(DeleteHubVisitTool::create_route(api.clone()))
        .with_route(UpdateHubVisitNotesTool::create_route(api))
}
