//! Environment lookup port.

/// Read-only view of environment variables.
///
/// Lookups happen on every call; implementations must not cache values.
pub trait EnvironmentSource: Send + Sync {
    /// Returns the current value of `name`, or `None` when unset.
    fn var(&self, name: &str) -> Option<String>;
}
