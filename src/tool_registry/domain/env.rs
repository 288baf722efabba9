//! `${NAME}` placeholder substitution against an environment source.

use crate::tool_registry::ports::EnvironmentSource;
use regex::{Captures, Regex};
use std::sync::LazyLock;

#[expect(
    clippy::expect_used,
    reason = "the placeholder pattern is a compile-time constant"
)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{(\w+)\}").expect("placeholder pattern should compile")
});

/// Replaces every `${NAME}` placeholder with the current value of `NAME`.
///
/// Unset variables become the empty string. Text outside placeholders is
/// left untouched, and the environment is consulted on every call.
///
/// # Examples
///
/// ```
/// use mcp_toolbridge::tool_registry::{
///     adapters::memory::InMemoryEnvironment, domain::substitute_env_vars,
/// };
///
/// let environment = InMemoryEnvironment::new().with_var("TOKEN", "s3cret");
/// assert_eq!(
///     substitute_env_vars("Bearer ${TOKEN}${MISSING}", &environment),
///     "Bearer s3cret"
/// );
/// ```
#[must_use]
pub fn substitute_env_vars<E>(text: &str, environment: &E) -> String
where
    E: EnvironmentSource + ?Sized,
{
    PLACEHOLDER
        .replace_all(text, |captures: &Captures<'_>| {
            captures
                .get(1)
                .and_then(|name| environment.var(name.as_str()))
                .unwrap_or_default()
        })
        .into_owned()
}
