//! Gate step execution.

use crate::error::{GateError, Result};
use crate::step::StepConfig;
use serde::{Deserialize, Serialize};
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;

/// Result of a step execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    /// Step name.
    pub step_name: String,

    /// Exit code (0 = success; 128+N for death by signal N).
    pub exit_code: i32,

    /// Duration in milliseconds.
    pub duration_ms: u64,

    /// Whether the process exited cleanly with status 0.
    pub success: bool,
}

impl StepResult {
    /// Whether this step passed (exit code 0).
    pub fn passed(&self) -> bool {
        self.success && self.exit_code == 0
    }
}

/// Gate step runner that executes one step and waits for its exit.
pub struct GateRunner;

impl GateRunner {
    /// Execute a single step and return the result.
    ///
    /// The command string is handed to a shell for interpretation, and
    /// the child inherits the runner's stdin/stdout/stderr so the
    /// operator sees the underlying tool output directly. There is no
    /// timeout: a hung step blocks until terminated externally.
    pub async fn execute_step(config: &StepConfig) -> Result<StepResult> {
        if config.command.trim().is_empty() {
            return Err(GateError::EmptyCommand {
                step: config.name.clone(),
            });
        }

        let start = Instant::now();

        let mut child = shell(&config.command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| GateError::Spawn {
                step: config.name.clone(),
                source,
            })?;

        let status = child.wait().await.map_err(|source| GateError::Wait {
            step: config.name.clone(),
            source,
        })?;

        let duration_ms = start.elapsed().as_millis() as u64;

        Ok(StepResult {
            step_name: config.name.clone(),
            exit_code: exit_code_of(status),
            duration_ms,
            success: status.success(),
        })
    }
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

/// Map an exit status to a numeric code, using the shell convention of
/// 128+N for a process killed by signal N.
fn exit_code_of(status: std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    -1
}
