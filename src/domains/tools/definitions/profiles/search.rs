//! Profile search tool.
//!
//! Searches Recurse Center profiles by free text, batch, location, role and
//! time overlap. All filters are optional; omitted ones are not sent.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::api::{ApiPath, ApiResult, RemoteRequest};
use crate::domains::tools::RemoteTool;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Role a person held at RC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProfileRole {
    Recurser,
    Resident,
    Facilitator,
    Faculty,
}

/// Time window a search is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProfileScope {
    /// People currently at RC.
    Current,
    /// People whose batches overlapped with yours.
    Overlap,
}

/// Parameters for the profile search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchProfilesParams {
    #[schemars(description = "Free-text search over names, interests, employers and bios")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[schemars(description = "Only people who attended this batch")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<u64>,

    #[schemars(description = "Only people associated with this location (see search-locations)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    #[schemars(description = "Only people who held this role")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ProfileRole>,

    #[schemars(description = "'current' for people at RC now, 'overlap' for people who overlapped with you")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<ProfileScope>,

    #[schemars(description = "Maximum number of results (1-50)")]
    #[schemars(range(min = 1, max = 50))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[schemars(description = "Number of results to skip, for paging")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Profile search tool - `GET /profiles`.
pub struct SearchProfilesTool;

impl RemoteTool for SearchProfilesTool {
    const NAME: &'static str = "search-profiles";

    const DESCRIPTION: &'static str = "Search Recurse Center profiles. Filter by free-text query, batch, location, role (recurser, resident, facilitator, faculty) or scope (current, overlap). Returns the matching profiles as JSON.";

    type Params = SearchProfilesParams;

    fn remote_request(params: &SearchProfilesParams) -> ApiResult<RemoteRequest> {
        RemoteRequest::get(ApiPath::new("profiles")).with_params(params)
    }

    fn failure_message(_params: &SearchProfilesParams) -> String {
        "Failed to search profiles".to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
