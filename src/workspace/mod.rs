//! Saved-workspace staleness detection.
//!
//! A saved workspace snapshot may be reused only when it is at least as
//! new as every file that could affect the engine's behavior: this
//! crate's own support files and every installed GAP package directory.
//! False negatives (regenerating a still-valid workspace) are
//! acceptable; reusing a stale workspace is not.

pub mod descriptor;
pub mod freshness;

pub use descriptor::WorkspaceDescriptor;
pub use freshness::Freshness;
