//! Tool discovery via `tools/list`.

use super::client::{DISCOVERY_TIMEOUT, McpClient};
use crate::tool_registry::{
    domain::{JsonRpcRequest, McpServerConfig, McpServerName, McpToolDefinition},
    ports::{EnvironmentSource, McpRpcTransport, McpTransportError},
};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

/// Errors raised while discovering tools on one server.
#[derive(Debug, Clone, Error)]
pub enum McpDiscoveryError {
    /// The request did not produce a JSON response.
    #[error(transparent)]
    Transport(#[from] McpTransportError),

    /// The response has no `result.tools` array.
    #[error("no tools found in response from MCP server {server}")]
    MissingToolList {
        /// Server that answered.
        server: McpServerName,
    },
}

impl<T, E> McpClient<T, E>
where
    T: McpRpcTransport,
    E: EnvironmentSource,
{
    /// Lists the tools exposed by `server`.
    ///
    /// Catalogue entries without a usable name are skipped with a warning;
    /// the remaining entries keep the server's order.
    ///
    /// # Errors
    ///
    /// Returns [`McpDiscoveryError`] when the request fails or the response
    /// lacks a `result.tools` array.
    pub async fn try_discover_tools(
        &self,
        server: &McpServerConfig,
    ) -> Result<Vec<McpToolDefinition>, McpDiscoveryError> {
        let request = self.rpc_request(server, JsonRpcRequest::tools_list(), DISCOVERY_TIMEOUT);
        let response = self.transport.send(request).await?;

        let Some(entries) = response
            .get("result")
            .and_then(|result| result.get("tools"))
            .and_then(Value::as_array)
        else {
            return Err(McpDiscoveryError::MissingToolList {
                server: server.name().clone(),
            });
        };

        Ok(entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| match McpToolDefinition::deserialize(entry) {
                Ok(definition) => Some(definition),
                Err(err) => {
                    warn!(
                        server = %server.name(),
                        index,
                        error = %err,
                        "skipping malformed MCP tool definition"
                    );
                    None
                }
            })
            .collect())
    }

    /// Lists the tools exposed by `server`, or nothing when discovery fails.
    ///
    /// Failures are logged and contained to this server.
    pub async fn discover_tools(&self, server: &McpServerConfig) -> Vec<McpToolDefinition> {
        match self.try_discover_tools(server).await {
            Ok(tools) => {
                info!(server = %server.name(), count = tools.len(), "discovered MCP tools");
                tools
            }
            Err(err @ McpDiscoveryError::MissingToolList { .. }) => {
                warn!(server = %server.name(), error = %err, "MCP server returned no tool list");
                Vec::new()
            }
            Err(err) => {
                error!(server = %server.name(), error = %err, "failed to discover MCP tools");
                Vec::new()
            }
        }
    }
}
