//! Default workspace naming convention under the user's home directory.

use std::path::PathBuf;

use crate::ports::env::Environment;
use crate::ports::layout::WorkspaceLayout;

/// Workspace layout rooted at a per-user dot directory.
///
/// Saved workspaces live at `<root>/gap/<kind>-<name>`, where `<root>`
/// defaults to `$HOME/.gapspace`. The staleness oracle treats these
/// paths as opaque; only this adapter knows the convention.
pub struct DotDirLayout {
    root: PathBuf,
}

impl DotDirLayout {
    /// Creates a layout rooted at an explicit directory.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Creates a layout rooted at `$HOME/.gapspace`.
    ///
    /// Falls back to `.gapspace` under the current directory when
    /// `HOME` is unset.
    #[must_use]
    pub fn from_env(env: &dyn Environment) -> Self {
        let base = env.var("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from);
        Self { root: base.join(".gapspace") }
    }
}

impl WorkspaceLayout for DotDirLayout {
    fn path_for(&self, kind: &str, name: &str) -> PathBuf {
        self.root.join("gap").join(format!("{kind}-{name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeEnv {
        home: Option<String>,
    }

    impl Environment for FakeEnv {
        fn var(&self, name: &str) -> Option<String> {
            if name == "HOME" {
                self.home.clone()
            } else {
                None
            }
        }
    }

    #[test]
    fn path_combines_kind_and_name_under_gap_dir() {
        let layout = DotDirLayout::new(PathBuf::from("/home/u/.gapspace"));
        assert_eq!(
            layout.path_for("libgap", "workspace"),
            PathBuf::from("/home/u/.gapspace/gap/libgap-workspace")
        );
    }

    #[test]
    fn from_env_uses_home() {
        let env = FakeEnv { home: Some("/home/u".into()) };
        let layout = DotDirLayout::from_env(&env);
        assert_eq!(
            layout.path_for("libgap", "test"),
            PathBuf::from("/home/u/.gapspace/gap/libgap-test")
        );
    }

    #[test]
    fn from_env_falls_back_to_current_dir_without_home() {
        let env = FakeEnv { home: None };
        let layout = DotDirLayout::from_env(&env);
        assert_eq!(
            layout.path_for("libgap", "test"),
            PathBuf::from("./.gapspace/gap/libgap-test")
        );
    }
}
