use crate::ports::ServiceCommandRunner;
use std::sync::Arc;
use sysdwitch_domain::{Allowlist, ServiceAction, ServiceName, ServiceStatus};
use tracing::{debug, error, instrument, warn};

/// Use case: report the current state of one allowlisted service.
pub struct GetServiceStatusUseCase {
    allowlist: Arc<Allowlist>,
    runner: Arc<dyn ServiceCommandRunner>,
}

impl GetServiceStatusUseCase {
    pub fn new(allowlist: Arc<Allowlist>, runner: Arc<dyn ServiceCommandRunner>) -> Self {
        Self { allowlist, runner }
    }

    #[instrument(skip(self), name = "get_service_status")]
    pub async fn execute(&self, raw_name: &str) -> ServiceStatus {
        let name = ServiceName::new(raw_name);
        if !self.allowlist.is_allowed(name.as_str()) {
            warn!(service = %name, "Status requested for non-allowed service");
            return ServiceStatus::not_allowed(name);
        }

        self.query(name).await
    }

    /// Queries a name that already passed the allowlist.
    pub(crate) async fn query(&self, name: ServiceName) -> ServiceStatus {
        match self.runner.execute(ServiceAction::IsActive, &name).await {
            Ok(state) => {
                debug!(service = %name, state = %state, "Service state read");
                ServiceStatus::from_state(name, state)
            }
            Err(e) => {
                error!(service = %name, error = %e, "Failed to get service status");
                ServiceStatus::error(name)
            }
        }
    }

    pub fn allowlist(&self) -> &Arc<Allowlist> {
        &self.allowlist
    }
}
