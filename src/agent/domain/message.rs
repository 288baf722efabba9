//! Conversation messages and the tool calls they carry.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The source of a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// System instructions.
    System,
    /// End-user input.
    User,
    /// Model output, possibly requesting tool calls.
    Assistant,
    /// Tool execution output.
    Tool,
}

impl Role {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Tool => "tool",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A pending tool call requested by the model.
///
/// `arguments` is kept exactly as the model produced it: usually a JSON
/// object, sometimes a raw JSON-encoded string.
///
/// # Examples
///
/// ```
/// use mcp_toolbridge::agent::domain::ToolCall;
/// use serde_json::json;
///
/// let call = ToolCall::new("call-1", "fs_read", json!("{\"path\": \"/tmp\"}"));
/// assert_eq!(call.argument_map().get("path"), Some(&json!("/tmp")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Identifier used to match the response to this call.
    pub call_id: String,
    /// Name of the tool the model wants to invoke.
    pub tool_name: String,
    /// Arguments as produced by the model.
    #[serde(default)]
    pub arguments: Value,
}

impl ToolCall {
    /// Creates a tool call.
    #[must_use]
    pub fn new(call_id: impl Into<String>, tool_name: impl Into<String>, arguments: Value) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            arguments,
        }
    }

    /// Returns the arguments as a JSON object.
    ///
    /// String payloads are decoded as JSON. Anything that does not yield an
    /// object (undecodable text, arrays, scalars, `null`) becomes an empty
    /// map so the call can still proceed.
    #[must_use]
    pub fn argument_map(&self) -> Map<String, Value> {
        match &self.arguments {
            Value::Object(map) => map.clone(),
            Value::String(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(Value::Object(map)) => map,
                _ => Map::new(),
            },
            _ => Map::new(),
        }
    }
}

/// A single message in an agent conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionMessage {
    role: Role,
    #[serde(default)]
    content: String,
    #[serde(default)]
    tool_calls: Vec<ToolCall>,
}

impl CompletionMessage {
    /// Creates a message with text content and no tool calls.
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_calls: Vec::new(),
        }
    }

    /// Creates an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Appends a pending tool call.
    #[must_use]
    pub fn with_tool_call(mut self, tool_call: ToolCall) -> Self {
        self.tool_calls.push(tool_call);
        self
    }

    /// Returns the message role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the pending tool calls in request order.
    #[must_use]
    pub fn tool_calls(&self) -> &[ToolCall] {
        &self.tool_calls
    }

    /// Returns the first pending tool call, if any.
    #[must_use]
    pub fn first_tool_call(&self) -> Option<&ToolCall> {
        self.tool_calls.first()
    }
}
