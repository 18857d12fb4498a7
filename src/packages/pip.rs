//! pip-backed package environment.
//!
//! Installed versions are read through `importlib.metadata` in the target
//! interpreter; installs and removals run `<python> -m pip`.

use crate::error::{DepcheckError, Result};
use crate::packages::PackageEnvironment;
use crate::shell::{display_command, execute, CommandOptions};

/// Exit status the metadata script uses for "package not installed".
const NOT_INSTALLED_STATUS: i32 = 3;

const VERSION_SCRIPT: &str = "\
import sys
from importlib import metadata
try:
    print(metadata.version(sys.argv[1]))
except metadata.PackageNotFoundError:
    sys.exit(3)
";

/// Default interpreter name for the current platform.
pub fn default_python() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}

/// A Python environment managed through `pip`.
#[derive(Debug, Clone)]
pub struct PipEnvironment {
    python: String,
}

impl PipEnvironment {
    /// Use the given interpreter (a name on PATH or a path to a venv's python).
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// The interpreter this environment drives.
    pub fn python(&self) -> &str {
        &self.python
    }

    fn pip_args<'a>(&self, action: &'a [&'a str], rest: &[&'a str]) -> Vec<&'a str> {
        let mut args = vec!["-m", "pip"];
        args.extend_from_slice(action);
        args.extend_from_slice(rest);
        args
    }
}

impl Default for PipEnvironment {
    fn default() -> Self {
        Self::new(default_python())
    }
}

impl PackageEnvironment for PipEnvironment {
    fn installed_version(&self, name: &str) -> Result<Option<String>> {
        let result = execute(
            &self.python,
            &["-c", VERSION_SCRIPT, name],
            &CommandOptions::captured(),
        )
        .map_err(|e| DepcheckError::PackageMetadataUnavailable {
            package: name.to_string(),
            message: e.to_string(),
        })?;

        if result.success {
            return Ok(Some(result.stdout.trim().to_string()));
        }
        if result.exit_code == Some(NOT_INSTALLED_STATUS) {
            return Ok(None);
        }

        Err(DepcheckError::PackageMetadataUnavailable {
            package: name.to_string(),
            message: format!(
                "{} exited with {:?}: {}",
                self.python,
                result.exit_code,
                result.stderr.trim()
            ),
        })
    }

    fn install(&mut self, requirements: &[&str]) -> Result<()> {
        let args = self.pip_args(&["install"], requirements);
        tracing::debug!("{}", display_command(&self.python, &args));

        let result = execute(&self.python, &args, &CommandOptions::default())?;
        if result.success {
            Ok(())
        } else {
            Err(DepcheckError::InstallFailed {
                requirement: requirements.join(" "),
                code: result.exit_code,
            })
        }
    }

    fn uninstall(&mut self, packages: &[&str]) -> Result<()> {
        let args = self.pip_args(&["uninstall", "-y"], packages);
        tracing::debug!("{}", display_command(&self.python, &args));

        let result = execute(&self.python, &args, &CommandOptions::default())?;
        if result.success {
            Ok(())
        } else {
            Err(DepcheckError::UninstallFailed {
                packages: packages.join(" "),
                code: result.exit_code,
            })
        }
    }
}
