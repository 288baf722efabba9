//! Process environment adapter.

use crate::tool_registry::ports::EnvironmentSource;

/// Reads variables from the current process environment.
///
/// Variables whose value is not valid Unicode are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
