//! Status command implementation.
//!
//! The `depcheck status` command shows which requirements of the selected
//! list are satisfied. It never installs anything.

use console::Style;

use crate::cli::args::StatusArgs;
use crate::error::{DepcheckError, Result};
use crate::requirements::{CheckResult, RequirementStatus};
use crate::ui::Reporter;
use crate::version::Version;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    ctx: CommandContext,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(ctx: CommandContext, args: StatusArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for StatusCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let preflight = self.ctx.preflight();
        let env = self.ctx.environment();
        let results = preflight.status(&env)?;

        if self.args.json {
            println!("{}", render_json(&results)?);
        } else {
            reporter.info(&format!(
                "{} requirements from {}",
                preflight.list_kind(),
                preflight.list_path().display()
            ));
            for result in &results {
                println!("{}", render_line(result));
            }
        }

        let unsatisfied = results.iter().filter(|r| !r.status.is_satisfied()).count();
        if unsatisfied == 0 {
            Ok(CommandResult::success())
        } else {
            tracing::debug!("{} requirements unsatisfied", unsatisfied);
            Ok(CommandResult::failure(1))
        }
    }
}

/// One styled line per requirement.
pub fn render_line(result: &CheckResult) -> String {
    let (icon, style) = match &result.status {
        RequirementStatus::Satisfied { .. } => ("✓", Style::new().green()),
        RequirementStatus::Mismatch { .. } => ("✗", Style::new().color256(208)),
        RequirementStatus::Missing => ("✗", Style::new().red()),
    };
    let detail = match result.status.installed() {
        Some(installed) if is_prerelease(installed) => {
            format!("installed {}, pre-release", installed)
        }
        Some(installed) => format!("installed {}", installed),
        None => "not installed".to_string(),
    };
    format!(
        "  {} {} {}",
        style.apply_to(icon),
        result.requirement,
        Style::new().dim().apply_to(format!("({})", detail))
    )
}

fn is_prerelease(installed: &str) -> bool {
    Version::parse(installed).is_ok_and(|v| v.is_prerelease())
}

/// The results as a pretty-printed JSON array.
pub fn render_json(results: &[CheckResult]) -> Result<String> {
    serde_json::to_string_pretty(results).map_err(|e| DepcheckError::Other(e.into()))
}
