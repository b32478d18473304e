//! STDIO transport implementation.
//!
//! One client on stdin/stdout for the lifetime of the process. Logs go to
//! stderr so they never interleave with protocol messages.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the client disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("{} ready on stdin/stdout", server.name());

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        let reason = service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("STDIO session ended: {:?}", reason);
        Ok(())
    }
}
