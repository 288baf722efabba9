//! Port contracts the agent loop expects client tools to satisfy.

mod tool;

pub use tool::ClientTool;
