//! `locate` command — resolve and print the GAP installation root.

use serde::Serialize;

use crate::config::GapConfig;
use crate::context::ServiceContext;
use crate::install::locate::{self, RootLayout};

#[derive(Serialize)]
struct LocateReport {
    root: String,
    layout: &'static str,
}

/// Resolves the installation root and prints it.
///
/// # Errors
///
/// Returns an error string when the installation cannot be located or
/// fails layout validation.
pub fn run(ctx: &ServiceContext, build_tree: bool, json: bool) -> Result<(), String> {
    let config = GapConfig::from_env(ctx.env.as_ref());
    let layout = if build_tree { RootLayout::BuildTree } else { RootLayout::Installed };
    let root = locate::resolve(ctx, &config, layout).map_err(|e| e.to_string())?;

    if json {
        let report = LocateReport {
            root: root.path().display().to_string(),
            layout: if build_tree { "build-tree" } else { "installed" },
        };
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize locate report: {e}"))?;
        println!("{rendered}");
    } else {
        println!("{}", root.path().display());
    }
    Ok(())
}
