pub mod services;

pub use services::{ControlServiceUseCase, GetAllServicesStatusUseCase, GetServiceStatusUseCase};
