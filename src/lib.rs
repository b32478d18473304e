//! Recurse Center MCP Server Library
//!
//! This crate exposes a fixed set of Recurse Center API operations (profile
//! search, batches, locations, hub visits) as Model Context Protocol tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and
//!   the transports (STDIO, TCP, HTTP, SSE)
//! - **domains**: business logic
//!   - **api**: authenticated calls to the remote REST API
//!   - **tools**: tool definitions, argument validation and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use rc_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::from_config(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
