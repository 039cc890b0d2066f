//! Package search-path handling.

use std::path::PathBuf;

use crate::config::GapConfig;
use crate::context::ServiceContext;
use crate::error::ConfigError;
use crate::install::locate::{self, GapRoot, RootLayout};
use crate::ports::filesystem::FileSystem;

/// Delimiter between search-path entries, matching the format GAP
/// accepts via its `-l` flag.
const DELIMITER: char = ';';

/// Ordered set of GAP root directories searched for packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootPaths {
    dirs: Vec<PathBuf>,
}

impl RootPaths {
    /// Parses a semicolon-joined search path.
    ///
    /// Empty segments produced by leading, trailing, or doubled
    /// delimiters are skipped, not treated as entries.
    #[must_use]
    pub fn parse(joined: &str) -> Self {
        Self {
            dirs: joined.split(DELIMITER).filter(|s| !s.is_empty()).map(PathBuf::from).collect(),
        }
    }

    /// A single-entry search path rooted at a resolved installation.
    #[must_use]
    pub fn from_root(root: &GapRoot) -> Self {
        Self { dirs: vec![root.path().to_path_buf()] }
    }

    /// The root directories in search order.
    #[must_use]
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Re-serializes to the semicolon-joined form GAP accepts.
    #[must_use]
    pub fn join(&self) -> String {
        self.dirs.iter().map(|d| d.display().to_string()).collect::<Vec<_>>().join(";")
    }

    /// Immediate entries of each root's `pkg` directory, in search order.
    ///
    /// A root without a readable `pkg` directory contributes nothing;
    /// an entry is allowed to hold no packages.
    #[must_use]
    pub fn package_dirs(&self, fs: &dyn FileSystem) -> Vec<PathBuf> {
        let mut packages = Vec::new();
        for dir in &self.dirs {
            let pkg = dir.join("pkg");
            if let Ok(entries) = fs.list_dir(&pkg) {
                packages.extend(entries.into_iter().map(|name| pkg.join(name)));
            }
        }
        packages
    }
}

/// Resolves the package search path for the given configuration.
///
/// A configured `GAP_ROOT_PATHS` value is parsed verbatim and bypasses
/// the locator entirely; otherwise an installed root is located and
/// becomes the only entry.
///
/// # Errors
///
/// Returns [`ConfigError`] when no search path is configured and the
/// installation cannot be located or validated.
pub fn resolve_root_paths(
    ctx: &ServiceContext,
    config: &GapConfig,
) -> Result<RootPaths, ConfigError> {
    match &config.root_paths {
        Some(joined) => Ok(RootPaths::parse(joined)),
        None => {
            locate::resolve(ctx, config, RootLayout::Installed).map(|root| RootPaths::from_root(&root))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::Path;
    use std::time::SystemTime;

    struct FakeFs {
        listings: HashMap<PathBuf, Vec<String>>,
    }

    impl FileSystem for FakeFs {
        fn exists(&self, path: &Path) -> bool {
            self.listings.contains_key(path)
        }

        fn is_executable_file(&self, _path: &Path) -> bool {
            false
        }

        fn list_dir(
            &self,
            path: &Path,
        ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
            self.listings.get(path).cloned().ok_or_else(|| "no such directory".into())
        }

        fn modified(
            &self,
            _path: &Path,
        ) -> Result<Option<SystemTime>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(None)
        }
    }

    struct NoEnv;

    impl crate::ports::env::Environment for NoEnv {
        fn var(&self, _name: &str) -> Option<String> {
            None
        }
    }

    struct NoWorkspaces;

    impl crate::ports::layout::WorkspaceLayout for NoWorkspaces {
        fn path_for(&self, kind: &str, name: &str) -> PathBuf {
            PathBuf::from(format!("{kind}-{name}"))
        }
    }

    fn ctx_of(fs: FakeFs) -> ServiceContext {
        ServiceContext { env: Box::new(NoEnv), fs: Box::new(fs), layout: Box::new(NoWorkspaces) }
    }

    #[test]
    fn parse_splits_on_semicolons() {
        let paths = RootPaths::parse("/opt/gap;/usr/share/gap");
        assert_eq!(paths.dirs(), [PathBuf::from("/opt/gap"), PathBuf::from("/usr/share/gap")]);
    }

    #[test]
    fn parse_skips_empty_segments() {
        for joined in [";/opt/gap", "/opt/gap;", "/opt/gap;;", ";;/opt/gap;"] {
            let paths = RootPaths::parse(joined);
            assert_eq!(paths.dirs(), [PathBuf::from("/opt/gap")], "input {joined:?}");
        }
    }

    #[test]
    fn parse_of_all_delimiters_is_empty() {
        assert!(RootPaths::parse(";;;").dirs().is_empty());
    }

    #[test]
    fn join_round_trips_the_entries() {
        let paths = RootPaths::parse("/a;/b");
        assert_eq!(paths.join(), "/a;/b");
    }

    #[test]
    fn package_dirs_expands_each_pkg_entry() {
        let mut listings = HashMap::new();
        listings.insert(
            PathBuf::from("/opt/gap/pkg"),
            vec!["io".to_string(), "smallsemi".to_string()],
        );
        let fs = FakeFs { listings };

        let paths = RootPaths::parse("/opt/gap;/elsewhere");
        assert_eq!(
            paths.package_dirs(&fs),
            [PathBuf::from("/opt/gap/pkg/io"), PathBuf::from("/opt/gap/pkg/smallsemi")]
        );
    }

    #[test]
    fn roots_without_pkg_contribute_nothing() {
        let fs = FakeFs { listings: HashMap::new() };
        let paths = RootPaths::parse("/opt/gap");
        assert!(paths.package_dirs(&fs).is_empty());
    }

    #[test]
    fn configured_root_paths_bypass_the_locator() {
        // No launcher and no override: locating would fail, but the
        // explicit search path short-circuits resolution entirely.
        let ctx = ctx_of(FakeFs { listings: HashMap::new() });
        let config =
            GapConfig { root_paths: Some(";/opt/gap;".to_string()), ..GapConfig::default() };

        let paths = resolve_root_paths(&ctx, &config).unwrap();
        assert_eq!(paths.dirs(), [PathBuf::from("/opt/gap")]);
    }

    #[test]
    fn locator_failure_propagates_without_configured_paths() {
        let ctx = ctx_of(FakeFs { listings: HashMap::new() });
        let err = resolve_root_paths(&ctx, &GapConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::EngineNotFound));
    }
}
