//! Process execution.
//!
//! Programs are started directly with an argument vector, never through a
//! shell, so requirement strings such as `numpy>=1.24` reach the program
//! untouched instead of being read as redirections.

use crate::error::{DepcheckError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Result of executing a program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }
}

/// Options for program execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl CommandOptions {
    /// Options that capture both output streams.
    pub fn captured() -> Self {
        Self {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        }
    }
}

/// Execute `program` with `args` and wait for it to finish.
///
/// Returns `Err(CommandFailed)` only when the process cannot be started;
/// a non-zero exit is reported through [`CommandResult::success`].
pub fn execute<S: AsRef<str>>(
    program: &str,
    args: &[S],
    options: &CommandOptions,
) -> Result<CommandResult> {
    let rendered = display_command(program, args);
    tracing::debug!("Running: {}", rendered);

    let mut cmd = Command::new(program);
    cmd.args(args.iter().map(|a| a.as_ref()));

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::inherit());

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to start {}: {}", program, e);
        DepcheckError::CommandFailed {
            command: rendered.clone(),
            code: None,
        }
    })?;

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        tracing::debug!("{} exited with {:?}", rendered, output.status.code());
        Ok(CommandResult::failure(output.status.code(), stdout, stderr))
    }
}

/// Execute a program quietly and return success/failure.
pub fn execute_check<S: AsRef<str>>(program: &str, args: &[S]) -> bool {
    execute(program, args, &CommandOptions::captured())
        .map(|r| r.success)
        .unwrap_or(false)
}

/// Render a program and its arguments for log and error messages.
pub fn display_command<S: AsRef<str>>(program: &str, args: &[S]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(|a| a.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn execute_successful_command() {
        let result = execute("echo", &["hello"], &CommandOptions::captured()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command() {
        let result = execute("sh", &["-c", "exit 3"], &CommandOptions::captured()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn arguments_are_not_shell_interpreted() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            ..CommandOptions::captured()
        };

        let result = execute("echo", &["numpy>=1.24"], &options).unwrap();

        assert!(result.stdout.contains("numpy>=1.24"));
        assert!(!temp.path().join("=1.24").exists());
    }

    #[test]
    fn execute_runs_in_working_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            ..CommandOptions::captured()
        };

        let result = execute("pwd", &[] as &[&str], &options).unwrap();

        assert!(result.success);
        let name = temp.path().file_name().unwrap().to_string_lossy();
        assert!(result.stdout.trim().ends_with(name.as_ref()));
    }

    #[test]
    fn failing_command_keeps_captured_output() {
        let result = execute(
            "sh",
            &["-c", "echo out; echo err >&2; exit 2"],
            &CommandOptions::captured(),
        )
        .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(2));
        assert_eq!(result.stdout.trim(), "out");
        assert_eq!(result.stderr.trim(), "err");
    }

    #[test]
    fn missing_program_is_command_failed() {
        let err = execute(
            "/nonexistent/depcheck-test-binary",
            &["--version"],
            &CommandOptions::captured(),
        )
        .unwrap_err();

        assert!(matches!(err, DepcheckError::CommandFailed { code: None, .. }));
    }

    #[test]
    fn execute_check_returns_bool() {
        assert!(execute_check("true", &[] as &[&str]));
        assert!(!execute_check("false", &[] as &[&str]));
        assert!(!execute_check("/nonexistent/depcheck-test-binary", &[] as &[&str]));
    }

    #[test]
    fn display_joins_program_and_args() {
        assert_eq!(
            display_command("python3", &["-m", "pip", "install", "onnx==1.14.0"]),
            "python3 -m pip install onnx==1.14.0"
        );
    }
}
