//! OpenAI-style function-calling descriptors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Function metadata advertised to a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSpec {
    /// Function name the model uses to request a call.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// JSON schema of the accepted arguments.
    pub parameters: Value,
}

/// Tool descriptor in function-calling format.
///
/// Serialises as `{"type": "function", "function": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolSchema {
    /// A callable function.
    Function {
        /// The function metadata.
        function: FunctionSpec,
    },
}

impl ToolSchema {
    /// Creates a function descriptor.
    #[must_use]
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Self::Function {
            function: FunctionSpec {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }

    /// Returns the function name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Function { function } => &function.name,
        }
    }
}
