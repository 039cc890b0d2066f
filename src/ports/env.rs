//! Environment port for process-environment lookups.

/// Provides access to environment variables.
///
/// Abstracting the environment lets the locator and the staleness
/// oracle run against an injected fake instead of mutating real
/// process state during tests.
pub trait Environment: Send + Sync {
    /// Returns the value of the named variable, or `None` if unset.
    fn var(&self, name: &str) -> Option<String>;
}
