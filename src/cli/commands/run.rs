//! Run command implementation.
//!
//! The `depcheck run -- <command>` command reconciles requirements and then
//! launches the application. A degraded check still launches it unless
//! `--strict` is given.

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::reconcile::CheckOutcome;
use crate::shell::{execute, CommandOptions};
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    ctx: CommandContext,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(ctx: CommandContext, args: RunArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for RunCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let mut env = self.ctx.environment();
        let outcome = self.ctx.preflight().run(&mut env, reporter);

        if let CheckOutcome::Degraded(_) = outcome {
            if self.args.strict {
                reporter.error("Not launching: requirements are not satisfied");
                return Ok(CommandResult::failure(1));
            }
        }

        let Some((program, args)) = self.args.command.split_first() else {
            return Ok(CommandResult::success());
        };

        let options = CommandOptions {
            cwd: Some(self.ctx.project_root.clone()),
            ..Default::default()
        };
        let result = execute(program, args, &options)?;

        if result.success {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(result.exit_code.unwrap_or(1)))
        }
    }
}
