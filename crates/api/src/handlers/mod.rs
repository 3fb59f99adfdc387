pub mod dashboard;
pub mod services;

pub use dashboard::dashboard;
pub use services::{api_fallback, control_service, get_services_status};
