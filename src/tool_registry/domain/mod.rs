//! Domain model for the MCP tool bridge.
//!
//! Server configuration, discovered tool metadata, registry-wide tool names,
//! placeholder substitution, and JSON-RPC framing. Transport and process
//! environment concerns remain outside this boundary.

mod env;
mod error;
mod ids;
mod jsonrpc;
mod server;
mod tool;

pub use env::substitute_env_vars;
pub use error::ToolRegistryDomainError;
pub use ids::{McpServerName, QualifiedToolName};
pub use jsonrpc::{JSONRPC_VERSION, JsonRpcRequest, McpMethod, render_call_response};
pub use server::McpServerConfig;
pub use tool::McpToolDefinition;
