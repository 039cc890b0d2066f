//! Core library for the `gapspace` CLI and binding support code.
//!
//! Answers two questions for a binding to the GAP computer-algebra
//! engine: where the installation lives on disk, and whether a
//! previously saved workspace snapshot is still fresh enough to reuse
//! instead of re-initializing the engine.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod install;
pub mod ports;
pub mod workspace;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["gapspace", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_reports_missing_subcommand() {
        let result = run(["gapspace"]);
        assert!(result.is_err());
    }
}
