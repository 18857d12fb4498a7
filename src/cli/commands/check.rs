//! Check command implementation.
//!
//! The `depcheck check` command installs missing or mismatched requirements
//! from the selected list. Failures are reported but, unless `--strict` is
//! given, do not fail the command.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::reconcile::CheckOutcome;
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    ctx: CommandContext,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(ctx: CommandContext, args: CheckArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let mut env = self.ctx.environment();
        let outcome = self.ctx.preflight().run(&mut env, reporter);

        match outcome {
            CheckOutcome::Ready(_) => Ok(CommandResult::success()),
            CheckOutcome::Degraded(_) if self.args.strict => Ok(CommandResult::failure(1)),
            CheckOutcome::Degraded(_) => Ok(CommandResult::success()),
        }
    }
}
