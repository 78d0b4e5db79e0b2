//! Runs external tools (`git`, `gh`) to completion.
//!
//! Two modes are offered: streaming, where the child inherits the terminal so
//! the operator sees progress and can answer credential prompts, and captured,
//! where stdout and stderr are collected for parsing.

use crate::error::{ReleaseError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Output of a captured command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub command: String,
    pub code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Converts a failed exit status into [`ReleaseError::Command`]
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(ReleaseError::command(self.command, self.code))
        }
    }
}

/// Renders a command line for messages and logs
pub fn render(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            line.push_str(&format!("\"{}\"", arg));
        } else {
            line.push_str(arg);
        }
    }
    line
}

fn build(program: &str, args: &[&str], cwd: Option<&Path>) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    cmd
}

/// Run a command with inherited stdio and wait for it.
///
/// # Returns
/// * `Ok(())` if the command exits with code 0
/// * `Err(ReleaseError::Io)` if it cannot be spawned
/// * `Err(ReleaseError::Command)` on a non-zero exit
pub fn run_streaming(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()> {
    let line = render(program, args);
    log::debug!("running `{}`", line);

    let status = build(program, args, cwd).status()?;
    log::debug!("`{}` exited with {}", line, status);

    if status.success() {
        Ok(())
    } else {
        Err(ReleaseError::command(line, status.code()))
    }
}

/// Run a command and capture its stdout and stderr.
///
/// A non-zero exit is not an error here; callers that need it use
/// [`CommandOutput::into_result`].
pub fn run_captured(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CommandOutput> {
    let line = render(program, args);
    log::debug!("running `{}` (captured)", line);

    let output = build(program, args, cwd)
        .stdin(Stdio::null())
        .output()?;
    log::debug!("`{}` exited with {}", line, output.status);

    Ok(CommandOutput {
        command: line,
        code: output.status.code(),
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Run a command capturing stdout only; stderr stays on the terminal.
pub fn run_stdout(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<String> {
    let line = render(program, args);
    log::debug!("running `{}` (stdout captured)", line);

    let output = build(program, args, cwd)
        .stderr(Stdio::inherit())
        .output()?;
    log::debug!("`{}` exited with {}", line, output.status);

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(ReleaseError::command(line, output.status.code()))
    }
}
