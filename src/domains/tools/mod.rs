//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool fronts exactly one Recurse Center API endpoint.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The `RemoteTool` trait and the shared invoke template
//! - `schema.rs` - Argument validation against the derived input schema
//! - `router.rs` - ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and JSON-RPC dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with a params struct and a unit
//!    struct implementing `RemoteTool`
//! 2. Export it in the group's `mod.rs` and in `definitions/mod.rs`
//! 3. Add a route in `router.rs` using `with_route()`
//! 4. Add it to `tool_names()`, `get_all_tools()` and `call_tool()` in
//!    `registry.rs`

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;
pub mod schema;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ToolError;
pub use handlers::*;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
