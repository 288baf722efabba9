//! MCP server configuration record.

use super::{McpServerName, ToolRegistryDomainError, substitute_env_vars};
use crate::tool_registry::ports::EnvironmentSource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One configured remote MCP server.
///
/// Immutable once loaded. Header values may still contain `${NAME}`
/// placeholders; they are resolved per request by
/// [`McpServerConfig::resolved_headers`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "McpServerConfigEntry")]
pub struct McpServerConfig {
    name: McpServerName,
    url: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<String>,
}

/// Wire shape of a configuration entry before validation.
#[derive(Debug, Deserialize)]
struct McpServerConfigEntry {
    name: String,
    url: String,
    #[serde(default)]
    headers: BTreeMap<String, String>,
    #[serde(default)]
    tools: Vec<String>,
}

impl TryFrom<McpServerConfigEntry> for McpServerConfig {
    type Error = ToolRegistryDomainError;

    fn try_from(entry: McpServerConfigEntry) -> Result<Self, Self::Error> {
        Ok(Self::new(entry.name, entry.url)?
            .with_headers(entry.headers)
            .with_tool_whitelist(entry.tools))
    }
}

impl McpServerConfig {
    /// Creates a server configuration with no headers and no whitelist.
    ///
    /// # Errors
    ///
    /// Returns [`ToolRegistryDomainError`] when the name is empty, or when the
    /// URL is empty or lacks an `http://` or `https://` prefix.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self, ToolRegistryDomainError> {
        let server_name = McpServerName::new(name)?;

        let normalized_url = url.into().trim().to_owned();
        if normalized_url.is_empty() {
            return Err(ToolRegistryDomainError::EmptyServerUrl);
        }

        let has_valid_prefix =
            normalized_url.starts_with("http://") || normalized_url.starts_with("https://");
        if !has_valid_prefix {
            return Err(ToolRegistryDomainError::InvalidServerUrl(normalized_url));
        }

        Ok(Self {
            name: server_name,
            url: normalized_url,
            headers: BTreeMap::new(),
            tools: Vec::new(),
        })
    }

    /// Replaces the request headers.
    #[must_use]
    pub fn with_headers(mut self, values: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers = values.into_iter().collect();
        self
    }

    /// Replaces the tool whitelist. An empty whitelist allows every tool.
    #[must_use]
    pub fn with_tool_whitelist(mut self, values: impl IntoIterator<Item = String>) -> Self {
        self.tools = values.into_iter().collect();
        self
    }

    /// Returns the server name.
    #[must_use]
    pub const fn name(&self) -> &McpServerName {
        &self.name
    }

    /// Returns the JSON-RPC endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the configured headers with placeholders unresolved.
    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Returns the tool whitelist.
    #[must_use]
    pub fn tool_whitelist(&self) -> &[String] {
        &self.tools
    }

    /// Returns whether `tool_name` passes the whitelist.
    #[must_use]
    pub fn allows_tool(&self, tool_name: &str) -> bool {
        self.tools.is_empty() || self.tools.iter().any(|allowed| allowed == tool_name)
    }

    /// Returns the headers with `${NAME}` placeholders resolved now.
    ///
    /// Each value is substituted independently, so rotated credentials are
    /// picked up without reloading the configuration.
    #[must_use]
    pub fn resolved_headers<E>(&self, environment: &E) -> BTreeMap<String, String>
    where
        E: EnvironmentSource + ?Sized,
    {
        self.headers
            .iter()
            .map(|(name, value)| (name.clone(), substitute_env_vars(value, environment)))
            .collect()
    }
}
