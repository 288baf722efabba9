//! Port contracts for reaching MCP servers and reading the environment.

mod environment;
mod transport;

pub use environment::EnvironmentSource;
#[cfg(test)]
pub use transport::MockMcpRpcTransport;
pub use transport::{McpRpcRequest, McpRpcTransport, McpTransportError, McpTransportResult};
