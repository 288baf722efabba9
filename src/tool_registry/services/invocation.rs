//! Tool invocation via `tools/call`.

use super::client::{INVOCATION_TIMEOUT, McpClient};
use crate::tool_registry::{
    domain::{JsonRpcRequest, McpServerConfig, render_call_response},
    ports::{EnvironmentSource, McpRpcTransport, McpTransportResult},
};
use serde_json::{Map, Value};
use tracing::error;

impl<T, E> McpClient<T, E>
where
    T: McpRpcTransport,
    E: EnvironmentSource,
{
    /// Calls `tool_name` on `server` and flattens the response to text.
    ///
    /// JSON-RPC error responses are not failures here; they render as
    /// `"Error: {message}"`.
    ///
    /// # Errors
    ///
    /// Returns transport errors when no JSON response was obtained.
    pub async fn try_call_tool(
        &self,
        server: &McpServerConfig,
        tool_name: &str,
        arguments: Map<String, Value>,
    ) -> McpTransportResult<String> {
        let request = self.rpc_request(
            server,
            JsonRpcRequest::tools_call(tool_name, arguments),
            INVOCATION_TIMEOUT,
        );
        let response = self.transport.send(request).await?;
        Ok(render_call_response(&response))
    }

    /// Calls `tool_name` on `server`, reporting transport failures as text.
    ///
    /// The returned string is always suitable as tool output:
    /// `"Error calling tool: {error}"` replaces any transport error.
    pub async fn invoke_tool(
        &self,
        server: &McpServerConfig,
        tool_name: &str,
        arguments: Map<String, Value>,
    ) -> String {
        match self.try_call_tool(server, tool_name, arguments).await {
            Ok(content) => content,
            Err(err) => {
                error!(
                    server = %server.name(),
                    tool = tool_name,
                    error = %err,
                    "failed to call MCP tool"
                );
                format!("Error calling tool: {err}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool_registry::{
        adapters::memory::{InMemoryEnvironment, ScriptedMcpTransport},
        domain::McpMethod,
        ports::McpTransportError,
    };
    use rstest::rstest;
    use serde_json::json;
    use std::sync::Arc;

    const SERVER_URL: &str = "http://localhost:8080/mcp";

    fn client_with(
        transport: ScriptedMcpTransport,
    ) -> McpClient<ScriptedMcpTransport, InMemoryEnvironment> {
        McpClient::new(Arc::new(transport), Arc::new(InMemoryEnvironment::new()))
    }

    fn server() -> McpServerConfig {
        McpServerConfig::new("fs", SERVER_URL).expect("valid config")
    }

    #[rstest]
    #[case(json!({"result": {"content": [{"text": "a"}, {"text": "b"}]}}), "a\nb")]
    #[case(json!({"error": {"message": "bad"}}), "Error: bad")]
    #[case(json!({"jsonrpc": "2.0"}), r#"{"jsonrpc":"2.0"}"#)]
    #[tokio::test(flavor = "multi_thread")]
    async fn response_is_rendered_as_text(#[case] response: Value, #[case] expected: &str) {
        let transport = ScriptedMcpTransport::new();
        transport
            .set_response(SERVER_URL, McpMethod::ToolsCall, response)
            .expect("script should be stored");

        let content = client_with(transport)
            .invoke_tool(&server(), "read", Map::new())
            .await;

        assert_eq!(content, expected);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn transport_failure_becomes_error_text() {
        let transport = ScriptedMcpTransport::new();
        transport
            .set_failure(
                SERVER_URL,
                McpTransportError::HttpStatus {
                    status: 500,
                    url: SERVER_URL.to_owned(),
                },
            )
            .expect("script should be stored");
        let client = client_with(transport);

        let strict = client.try_call_tool(&server(), "read", Map::new()).await;
        let lenient = client.invoke_tool(&server(), "read", Map::new()).await;

        assert!(strict.is_err());
        assert_eq!(
            lenient,
            format!("Error calling tool: HTTP status 500 from {SERVER_URL}")
        );
    }
}
