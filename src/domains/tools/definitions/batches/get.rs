//! Single batch lookup tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::api::{ApiPath, ApiResult, RemoteRequest};
use crate::domains::tools::RemoteTool;

/// Parameters for fetching one batch.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetBatchParams {
    #[schemars(description = "Id of the batch (see list-batches)")]
    pub batch_id: u64,
}

/// Batch lookup tool - `GET /batches/{batch_id}`.
pub struct GetBatchTool;

impl RemoteTool for GetBatchTool {
    const NAME: &'static str = "get-batch";

    const DESCRIPTION: &'static str = "Get a single Recurse Center batch by id.";

    type Params = GetBatchParams;

    fn remote_request(params: &GetBatchParams) -> ApiResult<RemoteRequest> {
        Ok(RemoteRequest::get(
            ApiPath::new("batches").segment(params.batch_id),
        ))
    }

    fn failure_message(params: &GetBatchParams) -> String {
        format!("Failed to get batch {}", params.batch_id)
    }
}
