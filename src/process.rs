//! A tool for executing external commands.

use crate::error::{Error, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Represents the output of a finished process.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutput {
    /// The stdout of the process.
    pub stdout: String,
    /// The stderr of the process.
    pub stderr: String,
    /// The exit code of the process.
    pub code: i32,
}

/// Runs `program` with `args` and captures its output.
///
/// # Errors
///
/// Returns [`Error::Command`] if the process could not be spawned or exited
/// with a non-zero status; stderr is included in the message.
pub async fn run_command(program: &Path, args: &[String]) -> Result<ProcessOutput> {
    log::debug!("Executing {} {:?}", program.display(), args);

    let output = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| Error::Command(format!("{}: {}", program.display(), e)))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    let code = output.status.code().unwrap_or(-1);

    if output.status.success() {
        return Ok(ProcessOutput {
            stdout,
            stderr,
            code,
        });
    }

    Err(Error::Command(format!(
        "{} failed with code {}: {}",
        program.display(),
        code,
        stderr.trim()
    )))
}
