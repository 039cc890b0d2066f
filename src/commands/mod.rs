//! Command dispatch and handlers.

pub mod locate;
pub mod paths;
pub mod workspace;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// Commands run against a live context; handlers receive it by
/// reference so tests can drive them with fakes.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Locate { build_tree, json } => locate::run(ctx, *build_tree, *json),
        Command::Paths { json } => paths::run(ctx, *json),
        Command::Workspace { kind, name, support_dir, json } => {
            workspace::run(ctx, kind, name, support_dir.as_deref(), *json)
        }
    }
}
