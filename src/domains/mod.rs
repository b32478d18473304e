//! Domains module containing business logic organized by bounded contexts.
//!
//! - **api**: the adapter that performs authenticated calls to the
//!   Recurse Center REST API
//! - **tools**: the MCP tools clients discover and call, each mapped onto
//!   one API call

pub mod api;
pub mod tools;
