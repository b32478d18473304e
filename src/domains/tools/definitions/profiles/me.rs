//! Own-profile tool.

use crate::domains::api::{ApiPath, ApiResult, RemoteRequest};
use crate::domains::tools::RemoteTool;
use crate::domains::tools::definitions::common::NoParams;

/// Own-profile tool - `GET /profiles/me`.
pub struct GetMyProfileTool;

impl RemoteTool for GetMyProfileTool {
    const NAME: &'static str = "get-my-profile";

    const DESCRIPTION: &'static str =
        "Get the Recurse Center profile of the account whose API token this server uses.";

    type Params = NoParams;

    fn remote_request(_params: &NoParams) -> ApiResult<RemoteRequest> {
        Ok(RemoteRequest::get(ApiPath::new("profiles").segment("me")))
    }

    fn failure_message(_params: &NoParams) -> String {
        "Failed to get your profile".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::api::ApiError;
    use crate::domains::tools::invoke;
    use crate::domains::tools::testing::{MockApi, args, reply_text};
    use serde_json::json;

    #[tokio::test]
    async fn test_requests_me() {
        let api = MockApi::ok(json!({ "id": 1, "first_name": "Grace" }));
        let result = invoke::<GetMyProfileTool>(api.clone(), args(json!({}))).await;
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(api.single_call().path.segments(), &["profiles", "me"]);
    }

    #[tokio::test]
    async fn test_stray_arguments_do_not_reach_remote() {
        let api = MockApi::ok(json!({}));
        invoke::<GetMyProfileTool>(api.clone(), args(json!({ "limit": 3 }))).await;
        assert!(api.single_call().params.is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let api = MockApi::err(ApiError::from_status(401, "bad token"));
        let result = invoke::<GetMyProfileTool>(api, args(json!({}))).await;
        assert_eq!(reply_text(&result), "Failed to get your profile");
    }
}
