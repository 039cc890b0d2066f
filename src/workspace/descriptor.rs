//! Saved-workspace descriptor resolution.

use std::path::PathBuf;

use crate::context::ServiceContext;
use crate::workspace::freshness::Freshness;

/// Location of a saved workspace snapshot and whether it may be reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceDescriptor {
    /// Canonical path the snapshot occupies, or should occupy once
    /// saved.
    pub path: PathBuf,
    /// `true` iff the snapshot exists and is at least as new as every
    /// file that could affect engine behavior.
    pub up_to_date: bool,
}

/// Resolves the workspace descriptor for a `(kind, name)` pair.
///
/// The path comes from the context's [`WorkspaceLayout`] collaborator
/// and is treated as opaque. A missing snapshot is the expected state
/// before the first save and reports `up_to_date = false` rather than
/// an error.
///
/// [`WorkspaceLayout`]: crate::ports::layout::WorkspaceLayout
#[must_use]
pub fn resolve(
    ctx: &ServiceContext,
    kind: &str,
    name: &str,
    freshness: Freshness,
) -> WorkspaceDescriptor {
    let path = ctx.layout.path_for(kind, name);
    let up_to_date = match ctx.fs.modified(&path) {
        Ok(Some(mtime)) => freshness.is_satisfied_by(mtime),
        Ok(None) => false,
        Err(e) => {
            log::debug!("could not probe workspace {}: {e}", path.display());
            false
        }
    };
    WorkspaceDescriptor { path, up_to_date }
}
