//! `paths` command — print the package search path.

use serde::Serialize;

use crate::config::GapConfig;
use crate::context::ServiceContext;
use crate::install::paths::resolve_root_paths;

#[derive(Serialize)]
struct PathsReport {
    root_paths: Vec<String>,
    joined: String,
    memory: Option<String>,
}

/// Resolves the search path and prints its semicolon-joined form.
///
/// # Errors
///
/// Returns an error string when no search path is configured and the
/// installation cannot be located.
pub fn run(ctx: &ServiceContext, json: bool) -> Result<(), String> {
    let config = GapConfig::from_env(ctx.env.as_ref());
    let root_paths = resolve_root_paths(ctx, &config).map_err(|e| e.to_string())?;

    if json {
        let report = PathsReport {
            root_paths: root_paths.dirs().iter().map(|d| d.display().to_string()).collect(),
            joined: root_paths.join(),
            memory: config.memory,
        };
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize paths report: {e}"))?;
        println!("{rendered}");
    } else {
        println!("{}", root_paths.join());
    }
    Ok(())
}
