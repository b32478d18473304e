//! Single profile lookup tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::api::{ApiPath, ApiResult, RemoteRequest};
use crate::domains::tools::RemoteTool;

/// Parameters for fetching one profile.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetProfileParams {
    /// Numeric person id or e-mail address.
    #[schemars(description = "Person id or e-mail address of the profile")]
    #[schemars(length(min = 1))]
    pub identifier: String,
}

/// Profile lookup tool - `GET /profiles/{identifier}`.
///
/// The identifier is free-form text and is percent-encoded into the path.
pub struct GetProfileTool;

impl RemoteTool for GetProfileTool {
    const NAME: &'static str = "get-profile";

    const DESCRIPTION: &'static str =
        "Get a single Recurse Center profile by person id or e-mail address.";

    type Params = GetProfileParams;

    fn remote_request(params: &GetProfileParams) -> ApiResult<RemoteRequest> {
        Ok(RemoteRequest::get(
            ApiPath::new("profiles").segment(&params.identifier),
        ))
    }

    fn failure_message(params: &GetProfileParams) -> String {
        format!("Failed to get profile for {}", params.identifier)
    }
}
