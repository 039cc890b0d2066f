//! Filesystem port for read-only metadata probes.

use std::path::Path;
use std::time::SystemTime;

/// Provides filesystem access for existence checks, directory listings,
/// and modification-time probes.
///
/// Abstracting the filesystem allows deterministic testing without
/// touching the real disk. All operations are read-only.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if the path is a regular file the current user
    /// may execute.
    fn is_executable_file(&self, path: &Path) -> bool;

    /// Lists the entry names of a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or cannot be read.
    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;

    /// Probes the modification time of a path.
    ///
    /// Returns `Ok(None)` when the path does not exist, so that the
    /// missing-file case is an ordinary value rather than an error to
    /// catch.
    ///
    /// # Errors
    ///
    /// Returns an error for probe failures other than the path being
    /// absent (permissions, I/O).
    fn modified(
        &self,
        path: &Path,
    ) -> Result<Option<SystemTime>, Box<dyn std::error::Error + Send + Sync>>;
}
