//! MCP tool discovery and the client tool registry built from it.
//!
//! Remote MCP servers are listed in an environment variable, each server's
//! tool catalogue is fetched with `tools/list`, and every allowed tool is
//! wrapped as an [`crate::agent::ports::ClientTool`] that forwards calls
//! over `tools/call`. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
