//! Resolution and validation of the GAP installation root.

use std::path::{Path, PathBuf};

use crate::config::GapConfig;
use crate::context::ServiceContext;
use crate::error::ConfigError;
use crate::ports::env::Environment;
use crate::ports::filesystem::FileSystem;

/// Name of the launcher binary searched for on `PATH`.
const LAUNCHER: &str = "gap";

/// A GAP installation root whose layout has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapRoot {
    path: PathBuf,
}

impl GapRoot {
    /// The root directory of the installation.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consumes the root, returning the underlying path.
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Which sub-resources a candidate root must contain.
///
/// An installed tree and a compiled build tree have different shapes;
/// the resolution algorithm is the same and only the validated
/// resources differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootLayout {
    /// Installed tree: the `lib/init.g` marker and the `pkg` directory.
    #[default]
    Installed,
    /// Build tree: the `.libs` compiled library and `build/gap` headers.
    BuildTree,
}

impl RootLayout {
    /// Checks that `root` contains this layout's required resources.
    fn validate(self, fs: &dyn FileSystem, root: &Path) -> Result<(), ConfigError> {
        match self {
            RootLayout::Installed => {
                if !fs.exists(&root.join("lib").join("init.g")) {
                    return Err(ConfigError::MissingResource {
                        what: "Folder `lib` with the GAP `init.g` file".into(),
                        expected_at: root.join("lib"),
                    });
                }
                if !fs.exists(&root.join("pkg")) {
                    return Err(ConfigError::MissingResource {
                        what: "Folder with the GAP packages".into(),
                        expected_at: root.join("pkg"),
                    });
                }
            }
            RootLayout::BuildTree => {
                if !fs.exists(&root.join(".libs")) {
                    return Err(ConfigError::MissingResource {
                        what: "Folder with the compiled GAP library".into(),
                        expected_at: root.join(".libs"),
                    });
                }
                if !fs.exists(&root.join("build").join("gap")) {
                    return Err(ConfigError::MissingResource {
                        what: "Folder with the GAP headers".into(),
                        expected_at: root.join("build").join("gap"),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Resolves the GAP installation root.
///
/// The directory containing an executable `gap` on `PATH` wins; the
/// `GAP_ROOT` override in `config` is consulted only when the launcher
/// is absent. The candidate is then validated against `layout`.
/// Read-only and deterministic for a fixed filesystem and environment.
///
/// # Errors
///
/// Returns [`ConfigError::EngineNotFound`] when neither source yields a
/// candidate, and [`ConfigError::MissingResource`] when the candidate
/// lacks a required sub-resource.
pub fn resolve(
    ctx: &ServiceContext,
    config: &GapConfig,
    layout: RootLayout,
) -> Result<GapRoot, ConfigError> {
    let root = match find_launcher_dir(ctx.env.as_ref(), ctx.fs.as_ref()) {
        Some(dir) => dir,
        None => config.root_override.clone().ok_or(ConfigError::EngineNotFound)?,
    };
    layout.validate(ctx.fs.as_ref(), &root)?;
    Ok(GapRoot { path: root })
}

/// Returns the first `PATH` entry containing an executable launcher.
fn find_launcher_dir(env: &dyn Environment, fs: &dyn FileSystem) -> Option<PathBuf> {
    let path_var = env.var("PATH")?;
    std::env::split_paths(&path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .find(|dir| fs.is_executable_file(&dir.join(LAUNCHER)))
}
