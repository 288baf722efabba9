//! Stateless JSON-RPC client shared by discovery and invocation.

use crate::tool_registry::{
    domain::{JsonRpcRequest, McpServerConfig},
    ports::{EnvironmentSource, McpRpcRequest, McpRpcTransport},
};
use std::sync::Arc;
use std::time::Duration;

/// Upper bound on a `tools/list` round-trip.
pub const DISCOVERY_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on a `tools/call` round-trip. Tool runs may outlast listing.
pub const INVOCATION_TIMEOUT: Duration = Duration::from_secs(60);

/// MCP client issuing one independent request per operation.
///
/// Headers are resolved against the environment on every request, and no
/// connection or session state is held per server.
pub struct McpClient<T, E>
where
    T: McpRpcTransport,
    E: EnvironmentSource,
{
    pub(super) transport: Arc<T>,
    environment: Arc<E>,
}

impl<T, E> McpClient<T, E>
where
    T: McpRpcTransport,
    E: EnvironmentSource,
{
    /// Creates a client.
    #[must_use]
    pub const fn new(transport: Arc<T>, environment: Arc<E>) -> Self {
        Self {
            transport,
            environment,
        }
    }

    pub(super) fn rpc_request(
        &self,
        server: &McpServerConfig,
        payload: JsonRpcRequest,
        timeout: Duration,
    ) -> McpRpcRequest {
        McpRpcRequest {
            url: server.url().to_owned(),
            headers: server.resolved_headers(&*self.environment),
            payload,
            timeout,
        }
    }
}
