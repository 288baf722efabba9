//! Registry building: config, discovery, whitelist, wrapping.

use super::{McpClient, McpConfigLoader};
use crate::agent::ports::ClientTool;
use crate::tool_registry::{
    adapters::{McpClientTool, ProcessEnvironment, ReqwestMcpTransport},
    domain::QualifiedToolName,
    ports::{EnvironmentSource, McpRpcTransport},
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Builds the client tool registry from the configured MCP servers.
///
/// Servers are processed one at a time in listed order; within a server,
/// tools keep the order of the discovery response. A server that fails
/// discovery contributes no tools and does not affect the others.
pub struct McpToolRegistryBuilder<T, E>
where
    T: McpRpcTransport,
    E: EnvironmentSource,
{
    loader: McpConfigLoader<E>,
    client: Arc<McpClient<T, E>>,
}

impl<T, E> McpToolRegistryBuilder<T, E>
where
    T: McpRpcTransport,
    E: EnvironmentSource,
{
    /// Creates a builder sharing `environment` between config loading and
    /// header resolution.
    #[must_use]
    pub fn new(transport: Arc<T>, environment: Arc<E>) -> Self {
        Self {
            loader: McpConfigLoader::new(Arc::clone(&environment)),
            client: Arc::new(McpClient::new(transport, environment)),
        }
    }

    /// Reads the server list from `variable` instead of the default.
    #[must_use]
    pub fn with_config_variable(mut self, variable: impl Into<String>) -> Self {
        self.loader = self.loader.with_variable(variable);
        self
    }

    /// Loads the configuration and wraps every allowed discovered tool.
    ///
    /// Combined names are not required to be unique. A repeated name is
    /// logged, and both wrappers are kept.
    pub async fn build(&self) -> Vec<McpClientTool<T, E>> {
        let mut tools = Vec::new();
        let mut seen_names: HashSet<QualifiedToolName> = HashSet::new();

        for config in self.loader.load() {
            let server = Arc::new(config);
            info!(server = %server.name(), "processing MCP server");

            for definition in self.client.discover_tools(&server).await {
                if !server.allows_tool(definition.name()) {
                    debug!(
                        server = %server.name(),
                        tool = definition.name(),
                        "skipping tool not in whitelist"
                    );
                    continue;
                }

                let tool =
                    McpClientTool::new(Arc::clone(&server), definition, Arc::clone(&self.client));
                if !seen_names.insert(tool.qualified_name().clone()) {
                    warn!(
                        tool = %tool.qualified_name(),
                        "duplicate MCP tool name; the later registration shadows the earlier one"
                    );
                }
                info!(tool = %tool.qualified_name(), "registered MCP tool");
                tools.push(tool);
            }
        }

        info!(count = tools.len(), "total MCP tools registered");
        tools
    }
}

impl McpToolRegistryBuilder<ReqwestMcpTransport, ProcessEnvironment> {
    /// Creates a builder using HTTP and the process environment.
    #[must_use]
    pub fn from_process_env() -> Self {
        Self::new(
            Arc::new(ReqwestMcpTransport::new()),
            Arc::new(ProcessEnvironment),
        )
    }
}

/// Builds client tools for every server listed in `MCP_SERVERS_JSON`.
///
/// The result can be handed straight to an agent constructor.
pub async fn create_mcp_client_tools() -> Vec<Arc<dyn ClientTool>> {
    McpToolRegistryBuilder::from_process_env()
        .build()
        .await
        .into_iter()
        .map(|tool| Arc::new(tool) as Arc<dyn ClientTool>)
        .collect()
}
