pub mod service;

pub use service::{ApiResponse, ServiceStatusResponse};
