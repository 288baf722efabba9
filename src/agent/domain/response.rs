//! Client tool response returned to the agent loop.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Call identifier used when no pending tool call could be found.
const UNKNOWN_CALL_ID: &str = "unknown";

/// The textual outcome of one client tool execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Identifier of the tool call this response answers.
    pub call_id: String,
    /// Name of the tool that produced the response.
    pub tool_name: String,
    /// Tool output, or a diagnostic string on failure.
    pub content: String,
    /// Free-form response annotations.
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
}

impl ToolResponse {
    /// Creates a response with empty metadata.
    #[must_use]
    pub fn new(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            content: content.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Creates a response for an execution request that carried no usable
    /// tool call.
    #[must_use]
    pub fn diagnostic(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(UNKNOWN_CALL_ID, tool_name, message)
    }

    /// Adds a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
