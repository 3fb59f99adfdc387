use async_trait::async_trait;
use sysdwitch_domain::{DomainError, ServiceAction, ServiceName};

/// Runs one service manager command against one unit.
///
/// Callers must have checked `unit` against the allowlist; implementations
/// do not check again. Start and stop change host state and are never
/// retried.
#[async_trait]
pub trait ServiceCommandRunner: Send + Sync {
    /// Returns the trimmed standard output on success.
    async fn execute(&self, action: ServiceAction, unit: &ServiceName)
        -> Result<String, DomainError>;
}
