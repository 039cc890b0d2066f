//! Service context bundling all port trait objects.

use crate::adapters::live::{DotDirLayout, LiveEnvironment, LiveFileSystem};
use crate::ports::env::Environment;
use crate::ports::filesystem::FileSystem;
use crate::ports::layout::WorkspaceLayout;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. The live
/// constructor wires real adapters; tests build a context from fakes
/// by filling the fields directly.
pub struct ServiceContext {
    /// Process environment for configuration lookups.
    pub env: Box<dyn Environment>,
    /// Filesystem for metadata probes.
    pub fs: Box<dyn FileSystem>,
    /// Naming convention for saved workspace files.
    pub layout: Box<dyn WorkspaceLayout>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for environment,
    /// filesystem, and the default dot-directory workspace layout.
    #[must_use]
    pub fn live() -> Self {
        let env = LiveEnvironment;
        let layout = DotDirLayout::from_env(&env);
        Self { env: Box::new(env), fs: Box::new(LiveFileSystem), layout: Box::new(layout) }
    }
}
