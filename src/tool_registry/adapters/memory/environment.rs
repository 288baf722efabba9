//! In-memory environment adapter.

use crate::tool_registry::ports::EnvironmentSource;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Environment backed by a shared in-memory map.
///
/// Clones share the same variables, so a test can keep a handle and rotate
/// values after handing the environment to a service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnvironment {
    vars: Arc<RwLock<BTreeMap<String, String>>>,
}

impl InMemoryEnvironment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable and returns the environment.
    #[must_use]
    pub fn with_var(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_var(name, value);
        self
    }

    /// Sets or replaces a variable.
    pub fn set_var(&self, name: impl Into<String>, value: impl Into<String>) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), value.into());
    }

    /// Removes a variable.
    pub fn remove_var(&self, name: &str) {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }
}

impl EnvironmentSource for InMemoryEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }
}
