//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mcp_toolbridge::tool_registry::{
    adapters::{
        McpClientTool,
        memory::{InMemoryEnvironment, ScriptedMcpTransport},
    },
    services::{DEFAULT_CONFIG_VARIABLE, McpToolRegistryBuilder},
};
use rstest::fixture;
use serde_json::{Value, json};

/// Client tool type produced by the in-memory registry.
pub type TestTool = McpClientTool<ScriptedMcpTransport, InMemoryEnvironment>;

/// Endpoint of the scripted filesystem server.
pub const FS_URL: &str = "http://fs.local/mcp";

/// Endpoint of the scripted search server.
pub const SEARCH_URL: &str = "http://search.local/mcp";

/// Transport, environment, and builder sharing state for one test.
pub struct TestContext {
    pub transport: Arc<ScriptedMcpTransport>,
    pub environment: InMemoryEnvironment,
    pub builder: McpToolRegistryBuilder<ScriptedMcpTransport, InMemoryEnvironment>,
}

/// Provides a registry over two scripted servers.
///
/// `fs` whitelists `read` out of `read` and `write`; `search` allows its
/// only tool, `query`, and sends an API key header.
#[fixture]
pub fn context() -> TestContext {
    let transport = Arc::new(ScriptedMcpTransport::new());
    transport
        .set_tool_catalog(
            FS_URL,
            vec![
                tool("read", "Reads a file"),
                tool("write", "Writes a file"),
            ],
        )
        .expect("fs catalog should be stored");
    transport
        .set_tool_catalog(SEARCH_URL, vec![tool("query", "Full-text search")])
        .expect("search catalog should be stored");

    let environment = InMemoryEnvironment::new()
        .with_var(
            DEFAULT_CONFIG_VARIABLE,
            json!([
                {"name": "fs", "url": FS_URL, "tools": ["read"]},
                {"name": "search", "url": SEARCH_URL, "headers": {"X-Api-Key": "${SEARCH_KEY}"}}
            ])
            .to_string(),
        )
        .with_var("SEARCH_KEY", "key-1");

    let builder = McpToolRegistryBuilder::new(transport.clone(), Arc::new(environment.clone()));
    TestContext {
        transport,
        environment,
        builder,
    }
}

/// Builds a discovery catalogue entry.
pub fn tool(name: &str, description: &str) -> Value {
    json!({
        "name": name,
        "description": description,
        "inputSchema": {"type": "object"}
    })
}

/// Finds a built tool by its registry-wide name.
pub fn find_tool<'a>(tools: &'a [TestTool], name: &str) -> Option<&'a TestTool> {
    tools
        .iter()
        .find(|candidate| candidate.qualified_name().as_str() == name)
}
