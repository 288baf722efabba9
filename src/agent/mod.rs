//! Agent framework contract consumed by the MCP tool bridge.
//!
//! The bridge does not own the agent loop. It only needs the message and
//! tool-call shapes the loop hands to a client tool, the response shape it
//! expects back, and the capability trait every client tool implements:
//!
//! - Domain types in [`domain`]
//! - The client tool capability in [`ports`]

pub mod domain;
pub mod ports;
