//! `workspace` command — report the saved workspace and its freshness.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::GapConfig;
use crate::context::ServiceContext;
use crate::install::paths::resolve_root_paths;
use crate::workspace::{descriptor, freshness};

#[derive(Serialize)]
struct WorkspaceReport {
    path: String,
    up_to_date: bool,
    /// Newest relevant input as RFC 3339; `null` when no inputs were
    /// found and every snapshot counts as stale.
    newest_input: Option<String>,
}

/// Resolves the workspace descriptor and prints it.
///
/// The support directory defaults to the running executable's own
/// directory: the binding's build artifacts are inputs whose change
/// invalidates every saved workspace.
///
/// # Errors
///
/// Returns an error string when no search path is configured and the
/// installation cannot be located, or when the support directory
/// cannot be determined.
pub fn run(
    ctx: &ServiceContext,
    kind: &str,
    name: &str,
    support_dir: Option<&Path>,
    json: bool,
) -> Result<(), String> {
    let config = GapConfig::from_env(ctx.env.as_ref());
    let root_paths = resolve_root_paths(ctx, &config).map_err(|e| e.to_string())?;

    let support_dir = match support_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_support_dir()?,
    };

    let freshness = freshness::compute(ctx, &support_dir, &root_paths);
    let descriptor = descriptor::resolve(ctx, kind, name, freshness);

    if json {
        let report = WorkspaceReport {
            path: descriptor.path.display().to_string(),
            up_to_date: descriptor.up_to_date,
            newest_input: freshness
                .to_system_time()
                .map(|t| DateTime::<Utc>::from(t).to_rfc3339()),
        };
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize workspace report: {e}"))?;
        println!("{rendered}");
    } else {
        println!("Workspace: {}", descriptor.path.display());
        println!("Up to date: {}", if descriptor.up_to_date { "yes" } else { "no" });
    }
    Ok(())
}

fn default_support_dir() -> Result<PathBuf, String> {
    let exe = std::env::current_exe()
        .map_err(|e| format!("Failed to determine the support directory: {e}"))?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        format!("Failed to determine the support directory: {} has no parent", exe.display())
    })
}
