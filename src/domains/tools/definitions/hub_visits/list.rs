//! Hub visit listing tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::api::{ApiPath, ApiResult, RemoteRequest};
use crate::domains::tools::RemoteTool;

/// Parameters for listing hub visits. Every filter is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetHubVisitsParams {
    #[schemars(description = "Only visits on this date (YYYY-MM-DD)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[schemars(description = "Only visits on or after this date (YYYY-MM-DD)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[schemars(description = "Only visits on or before this date (YYYY-MM-DD)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[schemars(description = "Only visits by this person")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<u64>,

    #[schemars(description = "Page number, starting at 1")]
    #[schemars(range(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[schemars(description = "Results per page (1-200)")]
    #[schemars(range(min = 1, max = 200))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Hub visit listing tool - `GET /hub_visits`.
pub struct GetHubVisitsTool;

impl RemoteTool for GetHubVisitsTool {
    const NAME: &'static str = "get-hub-visits";

    const DESCRIPTION: &'static str = "List hub visits, optionally filtered by a single date, a date range, or a person. Supports paging with page and per_page (max 200).";

    type Params = GetHubVisitsParams;

    fn remote_request(params: &GetHubVisitsParams) -> ApiResult<RemoteRequest> {
        RemoteRequest::get(ApiPath::new("hub_visits")).with_params(params)
    }

    fn failure_message(_params: &GetHubVisitsParams) -> String {
        "Failed to get hub visits".to_string()
    }
}
