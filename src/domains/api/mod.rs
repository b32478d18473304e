//! Recurse Center API domain module.
//!
//! This module is the single place where the server talks to the remote
//! REST API. Tools never build URLs or touch HTTP directly; they describe a
//! [`RemoteRequest`] and hand it to a [`RemoteApi`] implementation.
//!
//! ## Architecture
//!
//! - `request.rs` - Method, path and parameter bag of one outbound call
//! - `client.rs` - The `RemoteApi` trait and the reqwest-backed `RcClient`
//! - `error.rs` - Typed failure reasons for remote calls

mod client;
mod error;
mod request;

pub use client::{RcClient, RemoteApi};
pub use error::{ApiError, ApiResult};
pub use request::{ApiPath, HttpMethod, RemoteRequest};
