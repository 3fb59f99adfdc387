use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use sysdwitch_application::ports::ServiceCommandRunner;
use sysdwitch_domain::{DomainError, ServiceAction, ServiceName};
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, error};

pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// States `systemctl is-active` prints. It exits non-zero for every one of
/// them except `active`, which is a report rather than a failure.
const UNIT_STATES: &[&str] = &[
    "active",
    "reloading",
    "inactive",
    "failed",
    "activating",
    "deactivating",
    "maintenance",
    "refreshing",
    "unknown",
];

/// Runs `systemctl --user <subcommand> <unit>` in the invoking user's session.
///
/// Each call is bounded by `timeout`; when it elapses, or when the calling
/// future is dropped (client went away), the child is killed.
pub struct SystemctlRunner {
    program: String,
    leading_args: Vec<String>,
    timeout: Duration,
}

impl SystemctlRunner {
    pub fn new() -> Self {
        Self::user_session("systemctl", DEFAULT_COMMAND_TIMEOUT)
    }

    pub fn user_session(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            leading_args: vec!["--user".to_string()],
            timeout,
        }
    }

    #[cfg(test)]
    fn with_leading_args(program: &str, leading_args: &[&str], timeout: Duration) -> Self {
        Self {
            program: program.to_string(),
            leading_args: leading_args.iter().map(|a| a.to_string()).collect(),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for SystemctlRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceCommandRunner for SystemctlRunner {
    async fn execute(
        &self,
        action: ServiceAction,
        unit: &ServiceName,
    ) -> Result<String, DomainError> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.leading_args)
            .arg(action.subcommand())
            .arg(unit.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!(program = %self.program, action = %action, unit = %unit, "Running service command");

        let child = command.spawn().map_err(|e| {
            error!(program = %self.program, error = %e, "Failed to spawn service command");
            DomainError::CommandSpawn {
                program: self.program.clone(),
                reason: e.to_string(),
            }
        })?;

        // Dropping the wait future on timeout drops the child, which kills it.
        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                error!(action = %action, unit = %unit, error = %e, "Failed to collect command output");
                return Err(DomainError::IoError(e.to_string()));
            }
            Err(_) => {
                error!(
                    action = %action,
                    unit = %unit,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Service command timed out, process killed"
                );
                return Err(DomainError::CommandTimeout {
                    unit: unit.to_string(),
                    timeout_ms: self.timeout.as_millis() as u64,
                });
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if output.status.success() {
            return Ok(stdout);
        }

        if action == ServiceAction::IsActive && is_unit_state(&stdout) {
            debug!(unit = %unit, state = %stdout, code = ?output.status.code(), "Unit reported non-active state");
            return Ok(stdout);
        }

        error!(
            action = %action,
            unit = %unit,
            code = ?output.status.code(),
            stderr = %stderr,
            "Service command failed"
        );

        Err(DomainError::CommandFailed {
            unit: unit.to_string(),
            code: output.status.code(),
            stderr,
        })
    }
}

fn is_unit_state(stdout: &str) -> bool {
    UNIT_STATES.contains(&stdout)
}
