//! GAP installation discovery.
//!
//! Resolves the installation root from `PATH` or an explicit override,
//! validates its layout, and derives the package search path GAP is
//! started with.

pub mod locate;
pub mod paths;

pub use locate::{GapRoot, RootLayout};
pub use paths::{resolve_root_paths, RootPaths};
