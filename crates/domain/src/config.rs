pub mod auth;
pub mod errors;
pub mod logging;
pub mod rate_limit;
pub mod root;
pub mod server;
pub mod services;

pub use auth::AuthConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use rate_limit::RateLimitConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use services::ServicesConfig;
