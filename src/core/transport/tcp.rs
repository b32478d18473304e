//! TCP transport implementation.
//!
//! Line-delimited JSON-RPC over raw sockets. Every accepted connection is
//! an independent MCP session served by rmcp on its own task.

use std::net::SocketAddr;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{Instrument, info, info_span, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed accept before trying again.
const ACCEPT_BACKOFF_MS: u64 = 100;

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the TCP transport. Only returns if binding fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (JSON-RPC over TCP)", addr);

        loop {
            match listener.accept().await {
                Ok((stream, peer)) => {
                    if let Err(e) = stream.set_nodelay(true) {
                        warn!("Failed to set TCP_NODELAY for {}: {}", peer, e);
                    }

                    let server = server.clone();
                    tokio::spawn(
                        serve_connection(server, stream, peer)
                            .instrument(info_span!("tcp_client", %peer)),
                    );
                }
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(tokio::time::Duration::from_millis(ACCEPT_BACKOFF_MS))
                        .await;
                }
            }
        }
    }
}

/// Serve one client until it disconnects.
async fn serve_connection(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    info!("Accepted connection from {}", peer);

    let service = match server.serve(stream).await {
        Ok(service) => service,
        Err(e) => {
            warn!("Failed to initialize session: {}", e);
            return;
        }
    };

    match service.waiting().await {
        Ok(reason) => info!("Client disconnected: {:?}", reason),
        Err(e) => warn!("Error while serving client: {}", e),
    }
}
