use std::collections::HashSet;

use crate::config::ConfigError;
use crate::service::ServiceName;

/// The fixed set of units an operator may control.
///
/// Built once at startup and only read afterwards, so it can be shared
/// behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct Allowlist {
    ordered: Vec<ServiceName>,
    lookup: HashSet<ServiceName>,
}

impl Allowlist {
    pub fn new<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered = Vec::new();
        let mut lookup = HashSet::new();

        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                return Err(ConfigError::Validation(
                    "empty service name in allowed services".to_string(),
                ));
            }
            if entry.starts_with('-') {
                return Err(ConfigError::Validation(format!(
                    "service name '{}' must not start with '-'",
                    entry
                )));
            }
            if entry.chars().any(|c| c.is_whitespace() || c == '/') {
                return Err(ConfigError::Validation(format!(
                    "service name '{}' contains whitespace or '/'",
                    entry
                )));
            }

            let name = ServiceName::new(entry);
            if lookup.insert(name.clone()) {
                ordered.push(name);
            }
        }

        if ordered.is_empty() {
            return Err(ConfigError::Validation(
                "allowed services list is empty".to_string(),
            ));
        }

        Ok(Self { ordered, lookup })
    }

    /// Parses a comma separated list such as `ALLOWED_SERVICES`.
    pub fn parse_list(list: &str) -> Result<Self, ConfigError> {
        Self::new(list.split(','))
    }

    pub fn is_allowed(&self, raw: &str) -> bool {
        self.get(raw).is_some()
    }

    /// Normalizes `raw` and returns the configured entry it matches.
    pub fn get(&self, raw: &str) -> Option<&ServiceName> {
        self.lookup.get(&ServiceName::new(raw))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceName> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
