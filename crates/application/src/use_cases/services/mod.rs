pub mod control_service;
pub mod get_all_services_status;
pub mod get_service_status;

pub use control_service::ControlServiceUseCase;
pub use get_all_services_status::GetAllServicesStatusUseCase;
pub use get_service_status::GetServiceStatusUseCase;
