use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ALLOWED_SERVICES: &str = "calibre.service,jellyfin.service,navidrome.service";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub allowed: Vec<String>,

    /// Service manager executable, invoked with `--user`.
    pub program: String,

    pub command_timeout_secs: u64,
}

impl ServicesConfig {
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            allowed: split_list(DEFAULT_ALLOWED_SERVICES),
            program: "systemctl".to_string(),
            command_timeout_secs: 30,
        }
    }
}

/// Splits a comma separated list, trimming each entry. Blank entries are
/// kept so that validation can report them.
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',').map(|s| s.trim().to_string()).collect()
}
