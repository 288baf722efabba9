//! MCP tool bridge: remote MCP tools as agent client tools.
//!
//! This crate discovers the tools exposed by remote Model Context Protocol
//! servers and registers them as invocable tools for an agent loop. Server
//! lists come from a JSON environment variable, discovery and invocation use
//! JSON-RPC 2.0 over HTTP POST, and every failure is contained at the
//! smallest scope: a bad config yields no servers, a bad server yields no
//! tools, and a bad call yields error text.
//!
//! # Architecture
//!
//! The bridge follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, environment)
//!
//! # Modules
//!
//! - [`agent`]: The client tool contract the agent loop consumes
//! - [`tool_registry`]: MCP configuration, discovery, invocation, and
//!   registry building

pub mod agent;
pub mod tool_registry;
