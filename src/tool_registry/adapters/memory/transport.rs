//! Scripted in-memory transport adapter.

use crate::tool_registry::{
    domain::McpMethod,
    ports::{McpRpcRequest, McpRpcTransport, McpTransportError, McpTransportResult},
};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory MCP transport answering from canned responses.
///
/// Responses are keyed by URL and method. Requests to a URL with no script
/// fail as unreachable. Every request is recorded for later inspection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMcpTransport {
    state: Arc<RwLock<ScriptedTransportState>>,
}

#[derive(Debug, Default)]
struct ScriptedTransportState {
    responses: HashMap<(String, McpMethod), Value>,
    failures: HashMap<String, McpTransportError>,
    requests: Vec<McpRpcRequest>,
}

fn lock_error(err: &impl ToString) -> McpTransportError {
    McpTransportError::request(std::io::Error::other(err.to_string()))
}

impl ScriptedMcpTransport {
    /// Creates a transport with no scripted servers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the raw response body for `method` at `url`.
    ///
    /// Existing scripts for the same pair are replaced.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn set_response(
        &self,
        url: impl Into<String>,
        method: McpMethod,
        response: Value,
    ) -> McpTransportResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.responses.insert((url.into(), method), response);
        Ok(())
    }

    /// Scripts a `tools/list` answer at `url` listing `tools`.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn set_tool_catalog(
        &self,
        url: impl Into<String>,
        tools: Vec<Value>,
    ) -> McpTransportResult<()> {
        self.set_response(
            url,
            McpMethod::ToolsList,
            json!({"jsonrpc": "2.0", "id": 1, "result": {"tools": tools}}),
        )
    }

    /// Makes every request to `url` fail with `error`.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn set_failure(
        &self,
        url: impl Into<String>,
        error: McpTransportError,
    ) -> McpTransportResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.failures.insert(url.into(), error);
        Ok(())
    }

    /// Returns every request received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn requests(&self) -> McpTransportResult<Vec<McpRpcRequest>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.requests.clone())
    }
}

#[async_trait]
impl McpRpcTransport for ScriptedMcpTransport {
    async fn send(&self, request: McpRpcRequest) -> McpTransportResult<Value> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.requests.push(request.clone());

        if let Some(error) = state.failures.get(&request.url) {
            return Err(error.clone());
        }

        state
            .responses
            .get(&(request.url.clone(), request.payload.method))
            .cloned()
            .ok_or(McpTransportError::Unreachable { url: request.url })
    }
}
