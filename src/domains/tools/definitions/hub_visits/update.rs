//! Hub visit update tool.

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::visit_path;
use crate::domains::api::{ApiResult, RemoteRequest};
use crate::domains::tools::RemoteTool;

/// Parameters for updating a hub visit.
///
/// `person_id` and `date` address the visit and are not sent in the body;
/// `notes` and `app_data` are sent only when supplied.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateHubVisitParams {
    #[schemars(description = "Id of the person who visited")]
    #[serde(skip_serializing)]
    pub person_id: u64,

    #[schemars(description = "Date of the visit (YYYY-MM-DD)")]
    #[schemars(length(min = 1))]
    #[serde(skip_serializing)]
    pub date: String,

    #[schemars(description = "New notes for the visit")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[schemars(description = "Free-form application data to store on the visit")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_data: Option<JsonObject>,
}

/// Hub visit update tool - `PATCH /hub_visits/{person_id}/{date}`.
pub struct UpdateHubVisitTool;

impl RemoteTool for UpdateHubVisitTool {
    const NAME: &'static str = "update-hub-visit";

    const DESCRIPTION: &'static str = "Create or update the hub visit of a person on a date. Optionally set notes and/or free-form app_data; fields that are not given are left untouched.";

    type Params = UpdateHubVisitParams;

    fn remote_request(params: &UpdateHubVisitParams) -> ApiResult<RemoteRequest> {
        RemoteRequest::patch(visit_path(params.person_id, &params.date)).with_params(params)
    }

    fn failure_message(params: &UpdateHubVisitParams) -> String {
        format!(
            "Failed to update hub visit for person {} on {}",
            params.person_id, params.date
        )
    }
}
