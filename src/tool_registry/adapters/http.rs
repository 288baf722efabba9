//! HTTP transport adapter sending JSON-RPC requests with `reqwest`.

use crate::tool_registry::ports::{
    McpRpcRequest, McpRpcTransport, McpTransportError, McpTransportResult,
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::collections::BTreeMap;

/// JSON-RPC over HTTP POST.
///
/// Each call stands alone: the default client keeps no idle connections,
/// so every request opens a fresh one and no MCP session state survives
/// between calls.
#[derive(Debug, Clone)]
pub struct ReqwestMcpTransport {
    client: reqwest::Client,
}

impl ReqwestMcpTransport {
    /// Creates a transport whose HTTP client never reuses connections.
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Creates a transport around a preconfigured HTTP client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestMcpTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn header_map(headers: &BTreeMap<String, String>) -> McpTransportResult<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
            McpTransportError::InvalidHeader {
                name: name.clone(),
                reason: err.to_string(),
            }
        })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|err| McpTransportError::InvalidHeader {
                name: name.clone(),
                reason: err.to_string(),
            })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

#[async_trait]
impl McpRpcTransport for ReqwestMcpTransport {
    async fn send(&self, request: McpRpcRequest) -> McpTransportResult<Value> {
        let headers = header_map(&request.headers)?;

        let response = self
            .client
            .post(request.url.as_str())
            .headers(headers)
            .timeout(request.timeout)
            .json(&request.payload)
            .send()
            .await
            .map_err(|err| {
                if err.is_connect() {
                    McpTransportError::Unreachable {
                        url: request.url.clone(),
                    }
                } else {
                    McpTransportError::request(err)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(McpTransportError::HttpStatus {
                status: status.as_u16(),
                url: request.url,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(McpTransportError::invalid_body)
    }
}
