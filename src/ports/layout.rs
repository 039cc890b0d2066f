//! Workspace-layout port naming saved workspace files.

use std::path::PathBuf;

/// Yields the canonical on-disk location for a named saved-workspace
/// file of a given kind.
///
/// The naming and versioning convention belongs to the implementor;
/// callers treat the returned path as opaque and only probe it.
pub trait WorkspaceLayout: Send + Sync {
    /// Returns the path a saved workspace of `kind` and `name` should
    /// occupy, whether or not it exists yet.
    fn path_for(&self, kind: &str, name: &str) -> PathBuf;
}
