//! Hub visit notes tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::visit_path;
use crate::domains::api::{ApiResult, RemoteRequest};
use crate::domains::tools::RemoteTool;

/// Parameters for replacing a visit's notes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateHubVisitNotesParams {
    #[schemars(description = "Id of the person who visited")]
    #[serde(skip_serializing)]
    pub person_id: u64,

    #[schemars(description = "Date of the visit (YYYY-MM-DD)")]
    #[schemars(length(min = 1))]
    #[serde(skip_serializing)]
    pub date: String,

    #[schemars(description = "New notes; an empty string clears them")]
    pub notes: String,
}

/// Hub visit notes tool - `PATCH /hub_visits/{person_id}/{date}/notes`.
pub struct UpdateHubVisitNotesTool;

impl RemoteTool for UpdateHubVisitNotesTool {
    const NAME: &'static str = "update-hub-visit-notes";

    const DESCRIPTION: &'static str =
        "Replace the notes of a person's hub visit on a date. Pass an empty string to clear them.";

    type Params = UpdateHubVisitNotesParams;

    fn remote_request(params: &UpdateHubVisitNotesParams) -> ApiResult<RemoteRequest> {
        RemoteRequest::patch(visit_path(params.person_id, &params.date).segment("notes")).with_params(params)
    }

    fn failure_message(params: &UpdateHubVisitNotesParams) -> String {
        format!(
            "Failed to update notes for hub visit of person {} on {}",
            params.person_id, params.date
        )
    }
}
