//! Validated names for MCP servers and the client tools derived from them.

use super::ToolRegistryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated MCP server name.
///
/// Names are kept verbatim, so the combined client tool names match what
/// the configuration author wrote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct McpServerName(String);

impl McpServerName {
    /// Creates a validated MCP server name.
    ///
    /// # Errors
    ///
    /// Returns [`ToolRegistryDomainError::EmptyServerName`] when the name is
    /// empty or whitespace only.
    pub fn new(value: impl Into<String>) -> Result<Self, ToolRegistryDomainError> {
        let name = value.into();
        if name.trim().is_empty() {
            return Err(ToolRegistryDomainError::EmptyServerName);
        }

        Ok(Self(name))
    }

    /// Returns the MCP server name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for McpServerName {
    type Error = ToolRegistryDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<McpServerName> for String {
    fn from(value: McpServerName) -> Self {
        value.0
    }
}

impl AsRef<str> for McpServerName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for McpServerName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Registry-wide client tool name, formed as `"{server}_{tool}"`.
///
/// Uniqueness follows from the parts but is not enforced: two servers named
/// `a_b` and `a` exposing `c` and `b_c` both yield `a_b_c`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifiedToolName(String);

impl QualifiedToolName {
    /// Combines a server name and a tool name.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_toolbridge::tool_registry::domain::{McpServerName, QualifiedToolName};
    ///
    /// let server = McpServerName::new("fs").expect("valid server name");
    /// let name = QualifiedToolName::new(&server, "read");
    /// assert_eq!(name.as_str(), "fs_read");
    /// ```
    #[must_use]
    pub fn new(server: &McpServerName, tool_name: &str) -> Self {
        Self(format!("{server}_{tool_name}"))
    }

    /// Returns the combined name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for QualifiedToolName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for QualifiedToolName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
