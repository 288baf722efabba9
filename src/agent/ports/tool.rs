//! Client tool capability trait.

use crate::agent::domain::{CompletionMessage, ToolResponse, ToolSchema};
use async_trait::async_trait;
use serde_json::Value;

/// A tool the agent loop can advertise to a model and execute on demand.
///
/// Execution never fails: any problem is reported in the returned
/// [`ToolResponse`] content so one broken tool cannot abort the
/// conversation.
#[async_trait]
pub trait ClientTool: Send + Sync {
    /// Returns the unique tool name.
    fn name(&self) -> &str;

    /// Returns the human-readable description.
    fn description(&self) -> &str;

    /// Returns the JSON schema of accepted arguments.
    fn parameters(&self) -> &Value;

    /// Returns the tool in function-calling format.
    fn schema(&self) -> ToolSchema {
        ToolSchema::function(self.name(), self.description(), self.parameters().clone())
    }

    /// Executes the first pending tool call of the most recent message.
    async fn execute(&self, messages: &[CompletionMessage]) -> ToolResponse;
}
