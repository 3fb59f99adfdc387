use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

pub const SERVICE_SUFFIX: &str = ".service";

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_ERROR: &str = "error";
pub const STATUS_NOT_ALLOWED: &str = "not_allowed";

/// A unit name as understood by the service manager, always suffix-qualified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    /// Appends `.service` when the caller left it off. No other rewriting is
    /// done, so anything odd the caller sent stays visible to the allowlist.
    pub fn new(raw: &str) -> Self {
        if raw.ends_with(SERVICE_SUFFIX) {
            Self(raw.to_string())
        } else {
            Self(format!("{}{}", raw, SERVICE_SUFFIX))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn display_name(&self) -> &str {
        self.0.strip_suffix(SERVICE_SUFFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Status record handed back for every query.
///
/// Fields are private so that `active` can only ever be derived from the
/// status label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    name: ServiceName,
    status: String,
    active: bool,
}

impl ServiceStatus {
    pub fn from_state(name: ServiceName, state: impl Into<String>) -> Self {
        let status = state.into();
        let active = status == STATUS_ACTIVE;
        Self {
            name,
            status,
            active,
        }
    }

    pub fn not_allowed(name: ServiceName) -> Self {
        Self::from_state(name, STATUS_NOT_ALLOWED)
    }

    pub fn error(name: ServiceName) -> Self {
        Self::from_state(name, STATUS_ERROR)
    }

    pub fn name(&self) -> &ServiceName {
        &self.name
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_error(&self) -> bool {
        self.status == STATUS_ERROR
    }
}

/// Operations the command runner knows how to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceAction {
    IsActive,
    Start,
    Stop,
}

impl ServiceAction {
    pub fn subcommand(&self) -> &'static str {
        match self {
            ServiceAction::IsActive => "is-active",
            ServiceAction::Start => "start",
            ServiceAction::Stop => "stop",
        }
    }

    /// True for operations that change host state.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, ServiceAction::IsActive)
    }
}

impl fmt::Display for ServiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subcommand())
    }
}

/// Control actions accepted from API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCommand {
    Start,
    Stop,
}

impl ServiceCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCommand::Start => "start",
            ServiceCommand::Stop => "stop",
        }
    }

    pub fn action(&self) -> ServiceAction {
        match self {
            ServiceCommand::Start => ServiceAction::Start,
            ServiceCommand::Stop => ServiceAction::Stop,
        }
    }
}

impl FromStr for ServiceCommand {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(ServiceCommand::Start),
            "stop" => Ok(ServiceCommand::Stop),
            other => Err(DomainError::InvalidAction(other.to_string())),
        }
    }
}
