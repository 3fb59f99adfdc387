use serde::{Deserialize, Serialize};
use std::path::Path;

use super::auth::AuthConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::rate_limit::RateLimitConfig;
use super::server::ServerConfig;
use super::services::{split_list, ServicesConfig};
use crate::allowlist::Allowlist;

const LOCAL_CONFIG_PATH: &str = "sysdwitch.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/sysdwitch/config.toml";

/// Main configuration structure for Sysdwitch
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// HTTP listener, timeouts and static assets
    pub server: ServerConfig,

    /// Allowlist and service manager invocation
    pub services: ServicesConfig,

    /// Admin credentials for Basic Auth
    pub auth: AuthConfig,

    /// Per-client request limiting
    pub rate_limit: RateLimitConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file, environment and command line.
    ///
    /// Priority order (highest first):
    /// 1. Command-line overrides
    /// 2. Environment (`HOST`, `PORT`, `ALLOWED_SERVICES`, `ADMIN_USER`,
    ///    `ADMIN_PASS`, `LOG_LEVEL`)
    /// 3. Explicit path, else sysdwitch.toml, else /etc/sysdwitch/config.toml
    /// 4. Defaults
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::load_with_env(path, cli_overrides, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with an injectable environment lookup.
    pub fn load_with_env<F>(
        path: Option<&str>,
        cli_overrides: CliOverrides,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_env(env)?;
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_env<F>(&mut self, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty variables count as unset.
        let var = |key: &str| env(key).filter(|v| !v.is_empty());

        if let Some(host) = var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv("PORT".to_string(), port.clone()))?;
        }
        if let Some(list) = var("ALLOWED_SERVICES") {
            self.services.allowed = split_list(&list);
        }
        if let Some(user) = var("ADMIN_USER") {
            self.auth.username = Some(user);
        }
        if let Some(pass) = var("ADMIN_PASS") {
            self.auth.password = Some(pass);
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(())
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(list) = overrides.allowed_services {
            self.services.allowed = split_list(&list);
        }
        if let Some(dir) = overrides.static_dir {
            self.server.static_dir = dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Builds the allowlist from `services.allowed`.
    pub fn allowlist(&self) -> Result<Allowlist, ConfigError> {
        Allowlist::new(&self.services.allowed)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("invalid port number".to_string()));
        }

        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Validation("host cannot be empty".to_string()));
        }

        self.allowlist()?;
        self.auth.credentials()?;

        if self.services.program.trim().is_empty() {
            return Err(ConfigError::Validation(
                "service manager program cannot be empty".to_string(),
            ));
        }

        if self.services.command_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "command timeout must be greater than 0".to_string(),
            ));
        }

        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "request timeout must be greater than 0".to_string(),
            ));
        }

        if self.rate_limit.enabled
            && (self.rate_limit.max_requests == 0 || self.rate_limit.window_secs == 0)
        {
            return Err(ConfigError::Validation(
                "rate limit needs max_requests and window_secs greater than 0".to_string(),
            ));
        }

        if !Path::new(&self.server.static_dir).is_dir() {
            return Err(ConfigError::Validation(format!(
                "static directory '{}' does not exist",
                self.server.static_dir
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub allowed_services: Option<String>,
    pub static_dir: Option<String>,
    pub log_level: Option<String>,
}
