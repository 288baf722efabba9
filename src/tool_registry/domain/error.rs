//! Error types for MCP bridge domain validation.

use thiserror::Error;

/// Errors returned while constructing tool registry domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ToolRegistryDomainError {
    /// The server name is empty or whitespace only.
    #[error("MCP server name must not be empty")]
    EmptyServerName,

    /// The server URL is empty after trimming.
    #[error("MCP server URL must not be empty")]
    EmptyServerUrl,

    /// The server URL does not have an `http://` or `https://` prefix.
    #[error("MCP server URL '{0}' must start with 'http://' or 'https://'")]
    InvalidServerUrl(String),

    /// A tool definition name is empty or whitespace only.
    #[error("tool name must not be empty")]
    EmptyToolName,
}
