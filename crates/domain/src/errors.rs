use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid action. Supported: start, stop")]
    InvalidAction(String),

    #[error("Command for {unit} timed out after {timeout_ms}ms")]
    CommandTimeout { unit: String, timeout_ms: u64 },

    #[error("Command for {unit} exited with {}: {stderr}", exit_label(.code))]
    CommandFailed {
        unit: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to spawn {program}: {reason}")]
    CommandSpawn { program: String, reason: String },

    #[error("I/O error: {0}")]
    IoError(String),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "signal".to_string(),
    }
}
