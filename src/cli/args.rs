//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use crate::platform::Platform;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// depcheck - Make sure an application's Python requirements are installed.
#[derive(Debug, Parser)]
#[command(name = "depcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides depcheck.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Python interpreter that owns the package environment
    #[arg(long, global = true, env = "DEPCHECK_PYTHON")]
    pub python: Option<String>,

    /// Override the detected platform (macos, linux, windows)
    #[arg(long, global = true, value_name = "OS")]
    pub platform: Option<Platform>,

    /// Use the GPU requirement list when the platform allows it
    #[arg(long, global = true, conflicts_with = "cpu")]
    pub gpu: bool,

    /// Always use the CPU requirement list
    #[arg(long, global = true)]
    pub cpu: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install missing or mismatched requirements (default if no command specified)
    Check(CheckArgs),

    /// Show which requirements are satisfied, without installing
    Status(StatusArgs),

    /// Uninstall packages from the environment
    Uninstall(UninstallArgs),

    /// Check requirements, then launch the application
    Run(RunArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Exit non-zero when requirements could not be installed
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `uninstall` command.
#[derive(Debug, Clone, clap::Args)]
pub struct UninstallArgs {
    /// Package names to remove
    #[arg(required = true)]
    pub packages: Vec<String>,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Do not launch the application when requirements could not be installed
    #[arg(long)]
    pub strict: bool,

    /// Application command and its arguments
    #[arg(
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub command: Vec<String>,
}
