//! Tool-specific error types.

use thiserror::Error;

use super::schema::SchemaViolation;

/// Errors that can occur during tool dispatch.
///
/// Remote failures do not appear here: tools turn them into failure replies
/// themselves. These errors are about the invocation itself.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Wrap a schema violation for the named tool.
    pub fn from_violation(tool: &str, violation: SchemaViolation) -> Self {
        Self::invalid_arguments(tool, violation.to_string())
    }
}
