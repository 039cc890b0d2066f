//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `gapspace`.
#[derive(Debug, Parser)]
#[command(name = "gapspace", version, about = "Locate GAP and check saved workspace freshness")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve and print the GAP installation root.
    Locate {
        /// Validate a compiled build tree (`.libs`, `build/gap`)
        /// instead of an installed tree (`lib/init.g`, `pkg`).
        #[arg(long)]
        build_tree: bool,
        /// Emit the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the package search path passed to GAP via `-l`.
    Paths {
        /// Emit the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Report the saved workspace location and whether it is up to date.
    Workspace {
        /// Workspace kind, the first part of the snapshot filename.
        #[arg(long, default_value = "libgap")]
        kind: String,
        /// Workspace name, the second part of the snapshot filename.
        #[arg(long, default_value = "workspace")]
        name: String,
        /// Directory holding this binding's own support files.
        /// Defaults to the directory of the running executable.
        #[arg(long)]
        support_dir: Option<PathBuf>,
        /// Emit the result as JSON.
        #[arg(long)]
        json: bool,
    },
}
