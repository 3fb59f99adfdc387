use super::GetServiceStatusUseCase;
use futures::future::join_all;
use std::sync::Arc;
use sysdwitch_domain::ServiceStatus;
use tracing::{debug, instrument};

/// Use case: status of every allowlisted service.
///
/// Queries run concurrently and each one is resolved on its own, so a unit
/// whose command fails or times out shows up as `error` without affecting
/// the others. Result order follows the allowlist but callers should not
/// rely on it.
pub struct GetAllServicesStatusUseCase {
    get_status: Arc<GetServiceStatusUseCase>,
}

impl GetAllServicesStatusUseCase {
    pub fn new(get_status: Arc<GetServiceStatusUseCase>) -> Self {
        Self { get_status }
    }

    #[instrument(skip(self), name = "get_all_services_status")]
    pub async fn execute(&self) -> Vec<ServiceStatus> {
        let queries = self
            .get_status
            .allowlist()
            .iter()
            .cloned()
            .map(|name| self.get_status.query(name));

        let statuses = join_all(queries).await;

        debug!(
            total = statuses.len(),
            active = statuses.iter().filter(|s| s.is_active()).count(),
            errors = statuses.iter().filter(|s| s.is_error()).count(),
            "Collected service statuses"
        );

        statuses
    }
}
