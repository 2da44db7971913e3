//! CLI argument definitions.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::launcher::{BuildProfile, LaunchMode};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Launcher for the blob-indexer service",
    long_about = None
)]
pub struct LauncherArgs {
    /// Path to launcher.toml (overrides INDEXERCTL_CONFIG_PATH).
    #[arg(long = "config", global = true)]
    pub config_override: Option<PathBuf>,
    #[command(subcommand)]
    pub command: LauncherCommand,
}

/// Top-level commands; `run` and `start` share one launch code path.
#[derive(Debug, Clone, Subcommand)]
pub enum LauncherCommand {
    /// Launch a previously built artifact.
    Start(LaunchArgs),
    /// Build the artifact for the profile, then launch it.
    Run(LaunchArgs),
}

/// Arguments shared by `start` and `run`.
#[derive(Debug, Clone, Args)]
pub struct LaunchArgs {
    /// Build profile selecting the artifact (`debug` or `release`).
    #[arg(value_enum)]
    pub profile: BuildProfile,
    /// Wait attached to the terminal, or detach fire-and-forget.
    #[arg(long, value_enum, default_value_t = LaunchMode::Background)]
    pub mode: LaunchMode,
}
