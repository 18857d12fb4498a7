//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for settings shared by every command
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::{load_config, DepcheckConfig};
use crate::error::Result;
use crate::packages::pip::{default_python, PipEnvironment};
use crate::platform::{GpuMode, Platform};
use crate::reconcile::Preflight;
use crate::ui::Reporter;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `reporter` - Sink for informational and error messages
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// The byte handed to the OS. Codes outside 0..=255, such as a crashed
    /// child's NTSTATUS on Windows, become 1 so they never read as success.
    pub fn process_exit_code(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Settings resolved from CLI flags and the config file.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Project root that requirement list paths are relative to.
    pub project_root: PathBuf,
    /// Loaded configuration.
    pub config: DepcheckConfig,
    /// Host platform, detected or overridden.
    pub platform: Platform,
    /// How GPU capability is decided.
    pub gpu: GpuMode,
    /// Interpreter that owns the package environment.
    pub python: String,
}

impl CommandContext {
    /// Resolve settings. CLI flags win over the config file.
    pub fn from_cli(cli: &Cli, project_root: &Path) -> Result<Self> {
        let config = load_config(project_root, cli.config.as_deref())?;

        let gpu = if cli.gpu {
            GpuMode::Enabled
        } else if cli.cpu {
            GpuMode::Disabled
        } else {
            config.gpu
        };

        let python = cli
            .python
            .clone()
            .or_else(|| config.python.clone())
            .unwrap_or_else(|| default_python().to_string());

        Ok(Self {
            project_root: project_root.to_path_buf(),
            platform: cli.platform.unwrap_or_else(Platform::current),
            gpu,
            python,
            config,
        })
    }

    /// The package environment for the configured interpreter.
    pub fn environment(&self) -> PipEnvironment {
        PipEnvironment::new(self.python.clone())
    }

    /// Build the preflight check. GPU capability is resolved here, once.
    pub fn preflight(&self) -> Preflight<'_> {
        Preflight::new(
            &self.config,
            &self.project_root,
            self.platform,
            self.gpu.resolve(),
        )
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let ctx = CommandContext::from_cli(cli, &self.project_root)?;
        tracing::debug!(
            "Project {}, python {}, platform {}",
            ctx.project_root.display(),
            ctx.python,
            ctx.platform
        );

        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(ctx, args.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Status(args)) => {
                let cmd = super::status::StatusCommand::new(ctx, args.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Uninstall(args)) => {
                let cmd = super::uninstall::UninstallCommand::new(ctx, args.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(ctx, args.clone());
                cmd.execute(reporter)
            }
            None => {
                // Default to check with default args
                let cmd = super::check::CheckCommand::new(ctx, CheckArgs::default());
                cmd.execute(reporter)
            }
        }
    }
}
