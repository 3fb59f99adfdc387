//! Sysdwitch Domain Layer
pub mod allowlist;
pub mod config;
pub mod errors;
pub mod service;

pub use allowlist::Allowlist;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use service::{ServiceAction, ServiceCommand, ServiceName, ServiceStatus};
