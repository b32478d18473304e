//! Tool definitions module.
//!
//! This module exports all available tool definitions, grouped by the API
//! resource they front. Each tool is defined in its own file.

pub mod batches;
pub mod common;
pub mod hub_visits;
pub mod locations;
pub mod profiles;

pub use batches::{GetBatchTool, ListBatchesTool};
pub use hub_visits::{
    DeleteHubVisitTool, GetHubVisitsTool, UpdateHubVisitNotesTool, UpdateHubVisitTool,
};
pub use locations::SearchLocationsTool;
pub use profiles::{GetMyProfileTool, GetProfileTool, SearchProfilesTool};
