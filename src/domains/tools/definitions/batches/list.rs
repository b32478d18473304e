//! Batch listing tool.

use crate::domains::api::{ApiPath, ApiResult, RemoteRequest};
use crate::domains::tools::RemoteTool;
use crate::domains::tools::definitions::common::NoParams;

/// Batch listing tool - `GET /batches`.
pub struct ListBatchesTool;

impl RemoteTool for ListBatchesTool {
    const NAME: &'static str = "list-batches";

    const DESCRIPTION: &'static str =
        "List all Recurse Center batches with their ids, names and start/end dates.";

    type Params = NoParams;

    fn remote_request(_params: &NoParams) -> ApiResult<RemoteRequest> {
        Ok(RemoteRequest::get(ApiPath::new("batches")))
    }

    fn failure_message(_params: &NoParams) -> String {
        "Failed to list batches".to_string()
    }
}
