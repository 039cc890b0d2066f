//! Freshness timestamp over the files that can affect engine behavior.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::context::ServiceContext;
use crate::install::paths::RootPaths;

/// Lower bound on how new a saved workspace must be to stay usable.
///
/// Wraps Unix seconds as `f64`. [`Freshness::UNBOUNDED`] is positive
/// infinity: no saved workspace can ever satisfy it, which forces
/// regeneration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Freshness {
    seconds: f64,
}

impl Freshness {
    /// Freshness no snapshot can satisfy.
    pub const UNBOUNDED: Self = Self { seconds: f64::INFINITY };

    /// Freshness anchored at an exact modification time.
    #[must_use]
    pub fn at(mtime: SystemTime) -> Self {
        Self { seconds: unix_seconds(mtime) }
    }

    /// The timestamp in Unix seconds; infinite when unbounded.
    #[must_use]
    pub fn epoch_seconds(self) -> f64 {
        self.seconds
    }

    /// Returns `true` when no snapshot can satisfy this freshness.
    #[must_use]
    pub fn is_unbounded(self) -> bool {
        self.seconds.is_infinite()
    }

    /// The timestamp as a [`SystemTime`]; `None` when unbounded.
    #[must_use]
    pub fn to_system_time(self) -> Option<SystemTime> {
        use std::time::Duration;
        if !self.seconds.is_finite() {
            return None;
        }
        if self.seconds >= 0.0 {
            Some(UNIX_EPOCH + Duration::from_secs_f64(self.seconds))
        } else {
            Some(UNIX_EPOCH - Duration::from_secs_f64(-self.seconds))
        }
    }

    /// Whether a snapshot modified at `mtime` is still usable.
    ///
    /// The comparison is `>=`: a snapshot written in the same instant
    /// as the newest input counts as fresh.
    #[must_use]
    pub fn is_satisfied_by(self, mtime: SystemTime) -> bool {
        unix_seconds(mtime) >= self.seconds
    }
}

fn unix_seconds(t: SystemTime) -> f64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64(),
        // Pre-epoch mtimes sort below every post-epoch candidate.
        Err(e) => -e.duration().as_secs_f64(),
    }
}

/// Computes the freshness timestamp over the current candidate set.
///
/// Candidates are the immediate entries of `support_dir` plus every
/// package directory reachable from `root_paths`; the newest
/// modification time wins. The filesystem is probed anew on every call
/// so that freshly installed packages are observed immediately.
///
/// An empty candidate set yields [`Freshness::UNBOUNDED`] with a
/// warning. A candidate that vanishes between listing and probing is
/// skipped; the remaining candidates still bound the timestamp.
#[must_use]
pub fn compute(ctx: &ServiceContext, support_dir: &Path, root_paths: &RootPaths) -> Freshness {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(entries) = ctx.fs.list_dir(support_dir) {
        candidates.extend(entries.into_iter().map(|name| support_dir.join(name)));
    }
    candidates.extend(root_paths.package_dirs(ctx.fs.as_ref()));

    if candidates.is_empty() {
        log::warn!(
            "no support files or GAP package directories found under {}; \
             every saved workspace will be treated as stale",
            support_dir.display()
        );
        return Freshness::UNBOUNDED;
    }

    let mut newest: Option<SystemTime> = None;
    for candidate in &candidates {
        match ctx.fs.modified(candidate) {
            Ok(Some(mtime)) => {
                newest = Some(newest.map_or(mtime, |n| n.max(mtime)));
            }
            // Vanished between listing and probing.
            Ok(None) => {}
            Err(e) => {
                log::debug!("skipping unreadable candidate {}: {e}", candidate.display());
            }
        }
    }

    newest.map_or_else(
        || {
            log::warn!(
                "every freshness candidate vanished while probing; \
                 saved workspaces will be treated as stale"
            );
            Freshness::UNBOUNDED
        },
        Freshness::at,
    )
}
