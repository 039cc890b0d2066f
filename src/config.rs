//! Configuration derived from environment variables.
//!
//! All environment access happens when [`GapConfig::from_env`] is
//! called; nothing is read at startup or cached process-wide. Tests
//! inject a fake [`Environment`] instead of mutating the real process
//! environment.

use std::path::PathBuf;

use crate::ports::env::Environment;

/// Explicit GAP installation root, consulted when the launcher is not
/// on `PATH`.
pub const GAP_ROOT_VAR: &str = "GAP_ROOT";

/// Precomputed semicolon-delimited package search path. When set, the
/// locator is bypassed entirely.
pub const GAP_ROOT_PATHS_VAR: &str = "GAP_ROOT_PATHS";

/// Memory allocation hint handed to the engine untouched.
pub const GAP_MEMORY_VAR: &str = "GAP_MEMORY";

/// Configuration for locating GAP and its package directories.
#[derive(Debug, Clone, Default)]
pub struct GapConfig {
    /// Explicit installation root from [`GAP_ROOT_VAR`].
    pub root_override: Option<PathBuf>,
    /// Semicolon-joined search path from [`GAP_ROOT_PATHS_VAR`].
    pub root_paths: Option<String>,
    /// Opaque memory tuning value from [`GAP_MEMORY_VAR`]; passed to
    /// the engine as-is, never interpreted here.
    pub memory: Option<String>,
}

impl GapConfig {
    /// Builds a configuration snapshot from the given environment.
    #[must_use]
    pub fn from_env(env: &dyn Environment) -> Self {
        // Treat empty strings as unset: an empty GAP_ROOT_PATHS would
        // otherwise silently bypass the locator with zero roots.
        let non_empty = |value: String| if value.is_empty() { None } else { Some(value) };
        Self {
            root_override: env.var(GAP_ROOT_VAR).and_then(non_empty).map(PathBuf::from),
            root_paths: env.var(GAP_ROOT_PATHS_VAR).and_then(non_empty),
            memory: env.var(GAP_MEMORY_VAR).and_then(non_empty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeEnv(HashMap<String, String>);

    impl Environment for FakeEnv {
        fn var(&self, name: &str) -> Option<String> {
            self.0.get(name).cloned()
        }
    }

    fn env_of(pairs: &[(&str, &str)]) -> FakeEnv {
        FakeEnv(pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect())
    }

    #[test]
    fn empty_environment_yields_default_config() {
        let config = GapConfig::from_env(&env_of(&[]));
        assert!(config.root_override.is_none());
        assert!(config.root_paths.is_none());
        assert!(config.memory.is_none());
    }

    #[test]
    fn variables_are_picked_up() {
        let config = GapConfig::from_env(&env_of(&[
            ("GAP_ROOT", "/opt/gap"),
            ("GAP_ROOT_PATHS", "/opt/gap;/usr/share/gap"),
            ("GAP_MEMORY", "4g"),
        ]));
        assert_eq!(config.root_override, Some(PathBuf::from("/opt/gap")));
        assert_eq!(config.root_paths.as_deref(), Some("/opt/gap;/usr/share/gap"));
        assert_eq!(config.memory.as_deref(), Some("4g"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = GapConfig::from_env(&env_of(&[("GAP_ROOT", ""), ("GAP_ROOT_PATHS", "")]));
        assert!(config.root_override.is_none());
        assert!(config.root_paths.is_none());
    }
}
