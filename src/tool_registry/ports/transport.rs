//! JSON-RPC transport port for MCP servers.

use crate::tool_registry::domain::JsonRpcRequest;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for MCP transport operations.
pub type McpTransportResult<T> = Result<T, McpTransportError>;

/// One JSON-RPC round-trip to one server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McpRpcRequest {
    /// Endpoint URL.
    pub url: String,
    /// Request headers with placeholders already resolved.
    pub headers: BTreeMap<String, String>,
    /// JSON-RPC body.
    pub payload: JsonRpcRequest,
    /// Upper bound on the whole round-trip.
    pub timeout: Duration,
}

/// Sends JSON-RPC requests to MCP servers.
///
/// Every call is independent: implementations hold no per-server session
/// state between calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait McpRpcTransport: Send + Sync {
    /// Sends the request and returns the decoded JSON response body.
    ///
    /// # Errors
    ///
    /// Returns [`McpTransportError`] for invalid headers, network failures,
    /// timeouts, non-success HTTP statuses, and undecodable bodies.
    async fn send(&self, request: McpRpcRequest) -> McpTransportResult<Value>;
}

/// Errors returned by MCP transport adapters.
#[derive(Debug, Clone, Error)]
pub enum McpTransportError {
    /// A configured header name or value cannot be sent.
    #[error("invalid header '{name}': {reason}")]
    InvalidHeader {
        /// Header name as configured.
        name: String,
        /// Reason string.
        reason: String,
    },

    /// The server answered with a non-success HTTP status.
    #[error("HTTP status {status} from {url}")]
    HttpStatus {
        /// Numeric status code.
        status: u16,
        /// Endpoint URL.
        url: String,
    },

    /// No server answered at the URL.
    #[error("no MCP server reachable at {url}")]
    Unreachable {
        /// Endpoint URL.
        url: String,
    },

    /// The request failed in flight (connection, timeout, TLS).
    #[error("request failed: {0}")]
    Request(Arc<dyn std::error::Error + Send + Sync>),

    /// The response body is not valid JSON.
    #[error("invalid response body: {0}")]
    InvalidBody(Arc<dyn std::error::Error + Send + Sync>),
}

impl McpTransportError {
    /// Wraps an in-flight request failure.
    #[must_use]
    pub fn request(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Request(Arc::new(err))
    }

    /// Wraps a response decoding failure.
    #[must_use]
    pub fn invalid_body(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidBody(Arc::new(err))
    }
}
