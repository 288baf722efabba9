//! JSON-RPC 2.0 framing for the MCP methods the bridge uses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Protocol version sent with every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Every request is a single round-trip, so the id is constant.
const REQUEST_ID: u64 = 1;

/// Fallback used when an error response carries no message.
const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// MCP methods issued by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum McpMethod {
    /// Tool catalogue discovery.
    #[serde(rename = "tools/list")]
    ToolsList,
    /// Tool invocation.
    #[serde(rename = "tools/call")]
    ToolsCall,
}

impl McpMethod {
    /// Returns the wire method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToolsList => "tools/list",
            Self::ToolsCall => "tools/call",
        }
    }
}

impl fmt::Display for McpMethod {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A JSON-RPC 2.0 request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, always `"2.0"`.
    pub jsonrpc: String,
    /// Invoked method.
    pub method: McpMethod,
    /// Method parameters, omitted for `tools/list`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    /// Request identifier.
    pub id: u64,
}

impl JsonRpcRequest {
    fn new(method: McpMethod, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            method,
            params,
            id: REQUEST_ID,
        }
    }

    /// Builds a `tools/list` request.
    #[must_use]
    pub fn tools_list() -> Self {
        Self::new(McpMethod::ToolsList, None)
    }

    /// Builds a `tools/call` request for `tool_name` with `arguments`.
    #[must_use]
    pub fn tools_call(tool_name: &str, arguments: Map<String, Value>) -> Self {
        let mut params = Map::new();
        params.insert("name".to_owned(), Value::String(tool_name.to_owned()));
        params.insert("arguments".to_owned(), Value::Object(arguments));
        Self::new(McpMethod::ToolsCall, Some(Value::Object(params)))
    }
}

/// Flattens a `tools/call` response into the single string handed back to
/// the agent.
///
/// A `result` wins over an `error`. Result content arrays contribute the
/// `text` of each object element, newline-joined; when that yields nothing
/// the whole content array is rendered as JSON. Responses with neither key
/// are rendered whole.
///
/// # Examples
///
/// ```
/// use mcp_toolbridge::tool_registry::domain::render_call_response;
/// use serde_json::json;
///
/// let response = json!({"result": {"content": [{"text": "a"}, {"text": "b"}]}});
/// assert_eq!(render_call_response(&response), "a\nb");
///
/// let failure = json!({"error": {"message": "bad"}});
/// assert_eq!(render_call_response(&failure), "Error: bad");
/// ```
#[must_use]
pub fn render_call_response(response: &Value) -> String {
    if let Some(result) = response.get("result") {
        return render_content(result.get("content"));
    }

    if let Some(error) = response.get("error") {
        let message = error
            .get("message")
            .map_or_else(|| UNKNOWN_ERROR_MESSAGE.to_owned(), render_value);
        return format!("Error: {message}");
    }

    render_value(response)
}

fn render_content(content: Option<&Value>) -> String {
    match content {
        None => Value::Array(Vec::new()).to_string(),
        Some(Value::Array(items)) => {
            let joined = items
                .iter()
                .filter(|item| item.is_object())
                .map(|item| item.get("text").map_or_else(|| item.to_string(), render_value))
                .collect::<Vec<_>>()
                .join("\n");
            if joined.is_empty() {
                Value::Array(items.clone()).to_string()
            } else {
                joined
            }
        }
        Some(other) => render_value(other),
    }
}

/// Strings render bare; everything else renders as compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
