use std::sync::Arc;
use sysdwitch_application::use_cases::{
    ControlServiceUseCase, GetAllServicesStatusUseCase, GetServiceStatusUseCase,
};
use sysdwitch_domain::{Config, ConfigError};
use sysdwitch_infrastructure::system::SystemctlRunner;
use tracing::info;

pub struct UseCases {
    pub get_all_services_status: Arc<GetAllServicesStatusUseCase>,
    pub control_service: Arc<ControlServiceUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let allowlist = Arc::new(config.allowlist()?);
        let runner = Arc::new(SystemctlRunner::user_session(
            config.services.program.clone(),
            config.services.command_timeout(),
        ));

        info!(
            services = ?allowlist.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            program = %config.services.program,
            command_timeout_secs = config.services.command_timeout_secs,
            "Service manager initialized"
        );

        let get_status = Arc::new(GetServiceStatusUseCase::new(allowlist, runner.clone()));

        Ok(Self {
            get_all_services_status: Arc::new(GetAllServicesStatusUseCase::new(
                get_status.clone(),
            )),
            control_service: Arc::new(ControlServiceUseCase::new(runner, get_status)),
        })
    }
}
