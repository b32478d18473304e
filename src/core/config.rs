//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and a `.env` file, if present) on top of defaults.
//! The only mandatory value is the Recurse Center API token; without it the
//! server refuses to start.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment variable holding the bearer token for the remote API.
pub const API_TOKEN_VAR: &str = "RC_API_TOKEN";

/// Environment variable overriding the remote API base URL.
pub const API_BASE_URL_VAR: &str = "RC_API_BASE_URL";

/// Default base URL of the Recurse Center API.
pub const DEFAULT_API_BASE_URL: &str = "https://www.recurse.com/api/v1";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Remote API location.
    pub api: ApiConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Remote API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is appended to.
    pub base_url: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Personal access token for the Recurse Center API.
    /// Create one at: https://www.recurse.com/settings/apps
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "rc-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first; variables
    /// already set in the environment take precedence over it.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Fails when the API token is missing or blank.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(level) = lookup("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(base_url) = lookup(API_BASE_URL_VAR) {
            info!("Using API base URL from environment: {}", base_url);
            config.api.base_url = base_url;
        }

        config.transport = TransportConfig::from_vars(&lookup);

        config.credentials.api_token = lookup(API_TOKEN_VAR).filter(|t| !t.trim().is_empty());

        config.validate()?;
        Ok(config)
    }

    /// Set the API token (mostly useful for tests and embedding).
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.credentials.api_token = Some(token.into());
        self
    }

    /// The API token, or a configuration error when it is absent.
    pub fn api_token(&self) -> Result<&str> {
        self.credentials
            .api_token
            .as_deref()
            .ok_or_else(|| Error::config(format!("{} is not set", API_TOKEN_VAR)))
    }

    /// Check the settings the server cannot run without.
    pub fn validate(&self) -> Result<()> {
        self.api_token()?;

        if self.api.base_url.trim().is_empty() {
            return Err(Error::config(format!("{} is empty", API_BASE_URL_VAR)));
        }

        Ok(())
    }
}
