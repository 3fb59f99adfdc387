use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use sysdwitch_application::services::{AdminCredentials, SlidingWindowRateLimiter};
use sysdwitch_application::use_cases::{ControlServiceUseCase, GetAllServicesStatusUseCase};

#[derive(Clone)]
pub struct AppState {
    pub get_all_services_status: Arc<GetAllServicesStatusUseCase>,
    pub control_service: Arc<ControlServiceUseCase>,
    pub credentials: Arc<AdminCredentials>,
    /// `None` disables rate limiting.
    pub rate_limiter: Option<Arc<SlidingWindowRateLimiter>>,
    pub trust_proxy_headers: bool,
    pub static_dir: PathBuf,
    pub request_timeout: Duration,
}
