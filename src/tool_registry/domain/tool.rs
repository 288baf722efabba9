//! MCP tool definition value object.

use super::ToolRegistryDomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata for a tool exposed by an MCP server, as reported by
/// `tools/list`.
///
/// Only the name is checked, and it is kept exactly as the server sent it
/// so whitelisting and `tools/call` see the server's own spelling.
/// Description and schemas are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "McpToolDefinitionEntry", rename_all = "camelCase")]
pub struct McpToolDefinition {
    name: String,
    description: String,
    input_schema: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct McpToolDefinitionEntry {
    name: String,
    #[serde(default)]
    description: Option<Value>,
    #[serde(default)]
    input_schema: Option<Value>,
    #[serde(default)]
    output_schema: Option<Value>,
}

impl TryFrom<McpToolDefinitionEntry> for McpToolDefinition {
    type Error = ToolRegistryDomainError;

    fn try_from(entry: McpToolDefinitionEntry) -> Result<Self, Self::Error> {
        let definition = Self::new(
            entry.name,
            entry
                .description
                .as_ref()
                .map(description_text)
                .unwrap_or_default(),
            entry.input_schema.unwrap_or_else(empty_schema),
        )?;
        Ok(match entry.output_schema {
            Some(output_schema) => definition.with_output_schema(output_schema),
            None => definition,
        })
    }
}

/// Strings pass through bare, `null` reads as absent, anything else keeps
/// its JSON text.
fn description_text(description: &Value) -> String {
    match description {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn empty_schema() -> Value {
    Value::Object(Map::new())
}

impl McpToolDefinition {
    /// Creates a tool definition.
    ///
    /// # Errors
    ///
    /// Returns [`ToolRegistryDomainError::EmptyToolName`] when the name is
    /// empty or whitespace only.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Result<Self, ToolRegistryDomainError> {
        let tool_name = name.into();
        if tool_name.trim().is_empty() {
            return Err(ToolRegistryDomainError::EmptyToolName);
        }

        Ok(Self {
            name: tool_name,
            description: description.into(),
            input_schema,
            output_schema: None,
        })
    }

    /// Sets an optional output schema.
    #[must_use]
    pub fn with_output_schema(mut self, output_schema: Value) -> Self {
        self.output_schema = Some(output_schema);
        self
    }

    /// Returns the tool name as known to its server.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tool description, empty when the server gave none.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the input schema, an empty object when the server gave none.
    #[must_use]
    pub const fn input_schema(&self) -> &Value {
        &self.input_schema
    }

    /// Returns the optional output schema.
    #[must_use]
    pub const fn output_schema(&self) -> Option<&Value> {
        self.output_schema.as_ref()
    }
}
