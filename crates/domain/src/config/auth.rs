use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::ConfigError;

#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    pub username: Option<String>,

    #[serde(skip_serializing)]
    pub password: Option<String>,
}

impl AuthConfig {
    /// Returns the trimmed admin credentials, failing when either is missing.
    pub fn credentials(&self) -> Result<(String, String), ConfigError> {
        let username = self.username.as_deref().map(str::trim).unwrap_or("");
        let password = self.password.as_deref().map(str::trim).unwrap_or("");

        if username.is_empty() || password.is_empty() {
            return Err(ConfigError::Validation(
                "ADMIN_USER and ADMIN_PASS must be set".to_string(),
            ));
        }

        Ok((username.to_string(), password.to_string()))
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
