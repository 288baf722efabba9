//! Adapter implementations for the MCP bridge ports, and the client tool
//! adapter that plugs discovered MCP tools into the agent contract.

pub mod memory;

mod client_tool;
mod environment;
mod http;

pub use client_tool::McpClientTool;
pub use environment::ProcessEnvironment;
pub use http::ReqwestMcpTransport;
