//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport.
    #[cfg(feature = "stdio")]
    Stdio,

    /// TCP socket transport with JSON-RPC messages.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// HTTP transport with JSON-RPC over POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),

    /// Server-sent events stream plus a message endpoint per session.
    #[cfg(feature = "sse")]
    Sse(SseConfig),
}

/// TCP transport configuration.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

/// SSE transport configuration.
#[cfg(feature = "sse")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SseConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path clients GET to open an event stream.
    #[serde(default = "default_sse_path")]
    pub sse_path: String,

    /// Path clients POST messages to, with `?sessionId=`.
    #[serde(default = "default_message_path")]
    pub message_path: String,

    /// Seconds between keep-alive comments on idle streams.
    #[serde(default = "default_keep_alive_secs")]
    pub keep_alive_secs: u64,
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

#[cfg(feature = "sse")]
fn default_sse_path() -> String {
    "/sse".to_string()
}

#[cfg(feature = "sse")]
fn default_message_path() -> String {
    "/messages".to_string()
}

#[cfg(feature = "sse")]
fn default_keep_alive_secs() -> u64 {
    15
}

#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3000;

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8080;

#[cfg(feature = "sse")]
const DEFAULT_SSE_PORT: u16 = 3000;

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "sse")]
        {
            return Self::Sse(SseConfig::default());
        }

        #[cfg(all(not(feature = "sse"), feature = "stdio"))]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "sse"), not(feature = "stdio"), feature = "tcp"))]
        {
            return Self::Tcp(TcpConfig::default());
        }

        #[cfg(all(
            not(feature = "sse"),
            not(feature = "stdio"),
            not(feature = "tcp"),
            feature = "http"
        ))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http", feature = "sse")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, http or sse");
        }
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_TCP_PORT,
            host: default_host(),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

#[cfg(feature = "sse")]
impl Default for SseConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_SSE_PORT,
            host: default_host(),
            sse_path: default_sse_path(),
            message_path: default_message_path(),
            keep_alive_secs: default_keep_alive_secs(),
        }
    }
}

impl TransportConfig {
    /// Create a STDIO transport config.
    #[cfg(feature = "stdio")]
    pub fn stdio() -> Self {
        Self::Stdio
    }

    /// Create a TCP transport config.
    #[cfg(feature = "tcp")]
    pub fn tcp(port: u16, host: impl Into<String>) -> Self {
        Self::Tcp(TcpConfig {
            port,
            host: host.into(),
        })
    }

    /// Create an HTTP transport config.
    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Create an SSE transport config.
    #[cfg(feature = "sse")]
    pub fn sse(port: u16, host: impl Into<String>) -> Self {
        Self::Sse(SseConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(&|key: &str| std::env::var(key).ok())
    }

    /// Load transport config from an arbitrary variable lookup.
    ///
    /// `MCP_TRANSPORT` selects the transport; an unknown or missing value
    /// falls back to the default.
    pub fn from_vars<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let transport = lookup("MCP_TRANSPORT").unwrap_or_default().to_lowercase();

        #[allow(unused_variables)]
        let port = |key: &str, default: u16| -> u16 {
            lookup(key).and_then(|p| p.parse().ok()).unwrap_or(default)
        };

        match transport.as_str() {
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig {
                port: port("MCP_TCP_PORT", DEFAULT_TCP_PORT),
                host: lookup("MCP_TCP_HOST").unwrap_or_else(default_host),
            }),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig {
                port: port("MCP_HTTP_PORT", DEFAULT_HTTP_PORT),
                host: lookup("MCP_HTTP_HOST").unwrap_or_else(default_host),
                rpc_path: lookup("MCP_HTTP_PATH").unwrap_or_else(default_rpc_path),
                enable_cors: lookup("MCP_HTTP_CORS")
                    .map(|v| v.to_lowercase() != "false" && v != "0")
                    .unwrap_or(true),
            }),
            #[cfg(feature = "sse")]
            "sse" | "" => Self::Sse(SseConfig {
                port: port("MCP_SSE_PORT", DEFAULT_SSE_PORT),
                host: lookup("MCP_SSE_HOST").unwrap_or_else(default_host),
                ..Default::default()
            }),
            _ => Self::default(),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}:{}", cfg.host, cfg.port),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
            #[cfg(feature = "sse")]
            Self::Sse(cfg) => format!(
                "SSE on {}:{} (stream {}, messages {})",
                cfg.host, cfg.port, cfg.sse_path, cfg.message_path
            ),
        }
    }

    /// Check if this transport is the standard STDIO mode.
    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}
