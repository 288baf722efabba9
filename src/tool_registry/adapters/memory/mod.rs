//! In-memory adapters for tests and deterministic local flows.

mod environment;
mod transport;

pub use environment::InMemoryEnvironment;
pub use transport::ScriptedMcpTransport;
