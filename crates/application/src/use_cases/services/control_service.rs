use super::GetServiceStatusUseCase;
use crate::ports::ServiceCommandRunner;
use dashmap::DashMap;
use std::sync::Arc;
use sysdwitch_domain::{ServiceCommand, ServiceName, ServiceStatus};
use tokio::sync::Mutex;
use tracing::{error, info, instrument, warn};

/// Use case: start or stop an allowlisted service and report its new state.
///
/// Start/stop calls against the same unit are serialised; different units
/// proceed in parallel. Nothing is retried: a failed stop may have half
/// happened on the host.
pub struct ControlServiceUseCase {
    runner: Arc<dyn ServiceCommandRunner>,
    get_status: Arc<GetServiceStatusUseCase>,
    unit_locks: DashMap<ServiceName, Arc<Mutex<()>>>,
}

impl ControlServiceUseCase {
    pub fn new(
        runner: Arc<dyn ServiceCommandRunner>,
        get_status: Arc<GetServiceStatusUseCase>,
    ) -> Self {
        Self {
            runner,
            get_status,
            unit_locks: DashMap::new(),
        }
    }

    pub async fn start(&self, raw_name: &str) -> ServiceStatus {
        self.execute(raw_name, ServiceCommand::Start).await
    }

    pub async fn stop(&self, raw_name: &str) -> ServiceStatus {
        self.execute(raw_name, ServiceCommand::Stop).await
    }

    #[instrument(skip(self), name = "control_service")]
    pub async fn execute(&self, raw_name: &str, command: ServiceCommand) -> ServiceStatus {
        let name = ServiceName::new(raw_name);
        if !self.get_status.allowlist().is_allowed(name.as_str()) {
            warn!(
                service = %name,
                command = command.as_str(),
                "Attempted to control non-allowed service"
            );
            return ServiceStatus::not_allowed(name);
        }

        let lock = self.lock_for(&name);
        let _guard = lock.lock().await;

        if let Err(e) = self.runner.execute(command.action(), &name).await {
            error!(
                service = %name,
                command = command.as_str(),
                error = %e,
                "Service command failed"
            );
            return ServiceStatus::error(name);
        }

        let status = self.get_status.query(name).await;
        info!(
            service = %status.name(),
            command = command.as_str(),
            status = status.status(),
            "Service command completed"
        );
        status
    }

    fn lock_for(&self, name: &ServiceName) -> Arc<Mutex<()>> {
        self.unit_locks
            .entry(name.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
