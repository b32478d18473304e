//! Transport layer for the MCP server.
//!
//! This module provides different transport implementations:
//! - **STDIO**: Standard input/output - feature: `stdio`
//! - **TCP**: Raw TCP socket with JSON-RPC messages - feature: `tcp`
//! - **HTTP**: Stateless JSON-RPC over POST requests - feature: `http`
//! - **SSE**: Event stream plus message endpoint, one session per stream -
//!   feature: `sse` (default)
//!
//! STDIO and TCP hand the connection to rmcp. HTTP and SSE decode JSON-RPC
//! themselves in `rpc` and call into the same server handler.
//!
//! # Feature Flags
//!
//! - `stdio` (default): STDIO transport - minimal dependencies
//! - `sse` (default): SSE transport - adds axum, tokio-stream, uuid
//! - `tcp`: TCP transport - adds tokio/net
//! - `http`: HTTP transport - adds axum, tower, tower-http

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub mod rpc;

#[cfg(feature = "sse")]
pub mod session;

#[cfg(feature = "sse")]
pub mod sse;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

// Re-export configs for convenience
#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;

#[cfg(feature = "sse")]
pub use config::SseConfig;
