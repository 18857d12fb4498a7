//! Uninstall command implementation.
//!
//! The `depcheck uninstall` command removes packages from the environment,
//! typically before switching between the GPU and CPU variants of a package.

use crate::cli::args::UninstallArgs;
use crate::error::Result;
use crate::packages::PackageEnvironment;
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The uninstall command implementation.
pub struct UninstallCommand {
    ctx: CommandContext,
    args: UninstallArgs,
}

impl UninstallCommand {
    /// Create a new uninstall command.
    pub fn new(ctx: CommandContext, args: UninstallArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for UninstallCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let mut env = self.ctx.environment();
        uninstall(&mut env, &self.args.packages, reporter)?;
        Ok(CommandResult::success())
    }
}

/// Remove `packages` and report the outcome.
pub fn uninstall(
    env: &mut dyn PackageEnvironment,
    packages: &[String],
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let names: Vec<&str> = packages.iter().map(String::as_str).collect();
    reporter.info(&format!("Uninstall {}", names.join(" ")));
    env.uninstall(&names)?;
    reporter.info(&format!("Successfully uninstalled: {}", names.join(" ")));
    Ok(())
}
