//! Location search tool.
//!
//! Locations are cities or places people list on their profiles. The ids
//! returned here feed the `location_id` filter of `search-profiles`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::api::{ApiPath, ApiResult, RemoteRequest};
use crate::domains::tools::RemoteTool;

/// Parameters for location search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchLocationsParams {
    /// The search query string (location name).
    #[schemars(description = "Location name to search for, e.g. 'Brooklyn'")]
    pub query: String,

    #[schemars(description = "Maximum number of results (1-50)")]
    #[schemars(range(min = 1, max = 50))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Location search tool - `GET /locations`.
pub struct SearchLocationsTool;

impl RemoteTool for SearchLocationsTool {
    const NAME: &'static str = "search-locations";

    const DESCRIPTION: &'static str = "Search locations by name. Returns location ids usable as the location_id filter of search-profiles.";

    type Params = SearchLocationsParams;

    fn remote_request(params: &SearchLocationsParams) -> ApiResult<RemoteRequest> {
        RemoteRequest::get(ApiPath::new("locations")).with_params(params)
    }

    fn failure_message(params: &SearchLocationsParams) -> String {
        format!("Failed to search locations for \"{}\"", params.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::api::ApiError;
    use crate::domains::tools::invoke;
    use crate::domains::tools::testing::{MockApi, args, reply_text};
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_query_and_limit_sent() {
        let api = MockApi::ok(json!([{ "id": 5128581, "name": "New York City" }]));
        let result =
            invoke::<SearchLocationsTool>(api.clone(), args(json!({ "query": "new york", "limit": 50 }))).await;
        assert!(!result.is_error.unwrap_or(false));

        let call = api.single_call();
        assert_eq!(call.path.segments(), &["locations"]);
        assert_eq!(Value::Object(call.params), json!({ "query": "new york", "limit": 50 }));
    }

    #[tokio::test]
    async fn test_query_required() {
        let api = MockApi::ok(json!([]));
        let result = invoke::<SearchLocationsTool>(api.clone(), args(json!({ "limit": 5 }))).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(reply_text(&result).contains("query"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_limit_bounds() {
        let api = MockApi::ok(json!([]));
        let rejected =
            invoke::<SearchLocationsTool>(api.clone(), args(json!({ "query": "x", "limit": 51 }))).await;
        assert!(rejected.is_error.unwrap_or(false));
        assert!(api.calls().is_empty());

        let accepted =
            invoke::<SearchLocationsTool>(api.clone(), args(json!({ "query": "x", "limit": 1 }))).await;
        assert!(!accepted.is_error.unwrap_or(false));
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_quotes_query() {
        let api = MockApi::err(ApiError::Network("reset".into()));
        let result = invoke::<SearchLocationsTool>(api, args(json!({ "query": "Paris" }))).await;
        assert_eq!(reply_text(&result), "Failed to search locations for \"Paris\"");
    }
}
