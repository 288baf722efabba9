//! Domain types for agent conversations and client tool responses.
//!
//! All types are plain serde-serialisable values with no infrastructure
//! dependencies.

mod function;
mod message;
mod response;

pub use function::{FunctionSpec, ToolSchema};
pub use message::{CompletionMessage, Role, ToolCall};
pub use response::ToolResponse;
