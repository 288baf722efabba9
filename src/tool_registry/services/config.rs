//! Server list loading from an environment variable.

use crate::tool_registry::{
    domain::{McpServerConfig, substitute_env_vars},
    ports::EnvironmentSource,
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Variable holding the JSON server list unless overridden.
pub const DEFAULT_CONFIG_VARIABLE: &str = "MCP_SERVERS_JSON";

/// Configuration used when the variable is unset.
const EMPTY_CONFIG: &str = "[]";

/// Errors raised while loading the server list.
#[derive(Debug, Error)]
pub enum McpConfigError {
    /// The variable does not hold valid JSON after substitution.
    #[error("failed to parse {variable}: {source}")]
    Parse {
        /// Variable that was read.
        variable: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The variable holds JSON that is not an array.
    #[error("{variable} must hold a JSON array of MCP server entries")]
    NotAnArray {
        /// Variable that was read.
        variable: String,
    },
}

/// Loads [`McpServerConfig`] entries from one environment variable.
///
/// The whole raw value goes through `${NAME}` substitution before parsing,
/// so placeholders may land anywhere in the JSON text. The variable is read
/// afresh on every load.
#[derive(Debug)]
pub struct McpConfigLoader<E>
where
    E: EnvironmentSource,
{
    environment: Arc<E>,
    variable: String,
}

impl<E> McpConfigLoader<E>
where
    E: EnvironmentSource,
{
    /// Creates a loader reading [`DEFAULT_CONFIG_VARIABLE`].
    #[must_use]
    pub fn new(environment: Arc<E>) -> Self {
        Self {
            environment,
            variable: DEFAULT_CONFIG_VARIABLE.to_owned(),
        }
    }

    /// Reads the server list from `variable` instead.
    #[must_use]
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Returns the variable the loader reads.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Loads the configured servers in listed order.
    ///
    /// Entries that fail validation (missing or blank `name` or `url`,
    /// wrongly typed fields) are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`McpConfigError`] when the substituted text is not a JSON
    /// array.
    pub fn try_load(&self) -> Result<Vec<McpServerConfig>, McpConfigError> {
        let raw = self
            .environment
            .var(&self.variable)
            .unwrap_or_else(|| EMPTY_CONFIG.to_owned());
        let substituted = substitute_env_vars(&raw, &*self.environment);

        let document: Value =
            serde_json::from_str(&substituted).map_err(|source| McpConfigError::Parse {
                variable: self.variable.clone(),
                source,
            })?;
        let Value::Array(entries) = document else {
            return Err(McpConfigError::NotAnArray {
                variable: self.variable.clone(),
            });
        };

        Ok(entries
            .into_iter()
            .enumerate()
            .filter_map(
                |(index, entry)| match serde_json::from_value::<McpServerConfig>(entry) {
                    Ok(server) => Some(server),
                    Err(err) => {
                        warn!(
                            variable = %self.variable,
                            index,
                            error = %err,
                            "skipping invalid MCP server entry"
                        );
                        None
                    }
                },
            )
            .collect())
    }

    /// Loads the configured servers, or none when the list is unreadable.
    ///
    /// A malformed list is logged and treated as empty so the caller can
    /// carry on with zero servers.
    #[must_use]
    pub fn load(&self) -> Vec<McpServerConfig> {
        match self.try_load() {
            Ok(servers) => {
                info!(count = servers.len(), "loaded MCP server configurations");
                servers
            }
            Err(err) => {
                error!(error = %err, "failed to load MCP server configurations");
                Vec::new()
            }
        }
    }
}
