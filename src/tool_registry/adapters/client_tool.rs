//! Client tool adapter exposing one remote MCP tool to the agent loop.

use crate::agent::{
    domain::{CompletionMessage, ToolResponse},
    ports::ClientTool,
};
use crate::tool_registry::{
    domain::{McpServerConfig, McpToolDefinition, QualifiedToolName},
    ports::{EnvironmentSource, McpRpcTransport},
    services::McpClient,
};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Diagnostic returned when execution is requested with no messages.
pub const NO_MESSAGES_DIAGNOSTIC: &str = "No messages provided";

/// Diagnostic returned when the last message carries no tool call.
pub const NO_TOOL_CALLS_DIAGNOSTIC: &str = "No tool calls in message";

/// Metadata key naming the server that answered a call.
pub const MCP_SERVER_METADATA_KEY: &str = "mcp_server";

/// One (server, tool) pair wrapped as a [`ClientTool`].
///
/// The wrapper is immutable after construction. Each execution performs
/// its own `tools/call` round-trip with freshly resolved headers.
pub struct McpClientTool<T, E>
where
    T: McpRpcTransport,
    E: EnvironmentSource,
{
    name: QualifiedToolName,
    server: Arc<McpServerConfig>,
    definition: McpToolDefinition,
    client: Arc<McpClient<T, E>>,
}

impl<T, E> McpClientTool<T, E>
where
    T: McpRpcTransport,
    E: EnvironmentSource,
{
    /// Wraps `definition` as exposed by `server`.
    #[must_use]
    pub fn new(
        server: Arc<McpServerConfig>,
        definition: McpToolDefinition,
        client: Arc<McpClient<T, E>>,
    ) -> Self {
        Self {
            name: QualifiedToolName::new(server.name(), definition.name()),
            server,
            definition,
            client,
        }
    }

    /// Returns the registry-wide tool name.
    #[must_use]
    pub const fn qualified_name(&self) -> &QualifiedToolName {
        &self.name
    }

    /// Returns the configuration of the server hosting the tool.
    #[must_use]
    pub fn server(&self) -> &McpServerConfig {
        &self.server
    }

    /// Returns the tool definition as discovered.
    #[must_use]
    pub const fn definition(&self) -> &McpToolDefinition {
        &self.definition
    }
}

impl<T, E> fmt::Debug for McpClientTool<T, E>
where
    T: McpRpcTransport,
    E: EnvironmentSource,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("McpClientTool")
            .field("name", &self.name)
            .field("server", &self.server)
            .field("definition", &self.definition)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T, E> ClientTool for McpClientTool<T, E>
where
    T: McpRpcTransport,
    E: EnvironmentSource,
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn description(&self) -> &str {
        self.definition.description()
    }

    fn parameters(&self) -> &Value {
        self.definition.input_schema()
    }

    async fn execute(&self, messages: &[CompletionMessage]) -> ToolResponse {
        let Some(last_message) = messages.last() else {
            return ToolResponse::diagnostic(self.name.as_str(), NO_MESSAGES_DIAGNOSTIC);
        };
        let Some(tool_call) = last_message.first_tool_call() else {
            return ToolResponse::diagnostic(self.name.as_str(), NO_TOOL_CALLS_DIAGNOSTIC);
        };

        let content = self
            .client
            .invoke_tool(&self.server, self.definition.name(), tool_call.argument_map())
            .await;

        ToolResponse::new(tool_call.call_id.as_str(), self.name.as_str(), content)
            .with_metadata(MCP_SERVER_METADATA_KEY, self.server.name().as_str())
    }
}
