//! Application services for loading MCP server configuration, talking to
//! servers, and building the client tool registry.

mod client;
mod config;
mod discovery;
mod invocation;
mod registry;

pub use client::{DISCOVERY_TIMEOUT, INVOCATION_TIMEOUT, McpClient};
pub use config::{DEFAULT_CONFIG_VARIABLE, McpConfigError, McpConfigLoader};
pub use discovery::McpDiscoveryError;
pub use registry::{McpToolRegistryBuilder, create_mcp_client_tools};
