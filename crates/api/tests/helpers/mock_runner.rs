use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use sysdwitch_application::ports::ServiceCommandRunner;
use sysdwitch_domain::{DomainError, ServiceAction, ServiceName};

/// In-memory stand-in for the service manager. Start/stop flip the stored
/// state the way the host would.
#[derive(Clone, Default)]
pub struct MockServiceRunner {
    states: Arc<Mutex<HashMap<String, String>>>,
    failures: Arc<Mutex<HashMap<(ServiceAction, String), DomainError>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    panics: Arc<Mutex<Vec<(ServiceAction, String)>>>,
    calls: Arc<Mutex<Vec<(ServiceAction, String)>>>,
}

impl MockServiceRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_states(states: Vec<(&str, &str)>) -> Self {
        let runner = Self::new();
        for (unit, state) in states {
            runner.set_state(unit, state);
        }
        runner
    }

    pub fn set_state(&self, unit: &str, state: &str) {
        self.states
            .lock()
            .unwrap()
            .insert(unit.to_string(), state.to_string());
    }

    pub fn fail(&self, action: ServiceAction, unit: &str, error: DomainError) {
        self.failures
            .lock()
            .unwrap()
            .insert((action, unit.to_string()), error);
    }

    pub fn fail_with_exit(&self, action: ServiceAction, unit: &str) {
        self.fail(
            action,
            unit,
            DomainError::CommandFailed {
                unit: unit.to_string(),
                code: Some(1),
                stderr: format!("Failed to {} {}: Unit not found.", action, unit),
            },
        );
    }

    pub fn set_delay(&self, unit: &str, delay: Duration) {
        self.delays
            .lock()
            .unwrap()
            .insert(unit.to_string(), delay);
    }

    pub fn panic_on(&self, action: ServiceAction, unit: &str) {
        self.panics.lock().unwrap().push((action, unit.to_string()));
    }

    pub fn calls(&self) -> Vec<(ServiceAction, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_for(&self, action: ServiceAction) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(a, _)| *a == action)
            .count()
    }
}

#[async_trait]
impl ServiceCommandRunner for MockServiceRunner {
    async fn execute(
        &self,
        action: ServiceAction,
        unit: &ServiceName,
    ) -> Result<String, DomainError> {
        let unit = unit.as_str().to_string();
        self.calls.lock().unwrap().push((action, unit.clone()));

        let should_panic = self.panics.lock().unwrap().contains(&(action, unit.clone()));
        if should_panic {
            panic!("service manager crashed while handling {} {}", action, unit);
        }

        let delay = self.delays.lock().unwrap().get(&unit).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self
            .failures
            .lock()
            .unwrap()
            .get(&(action, unit.clone()))
            .cloned();
        if let Some(error) = failure {
            return Err(error);
        }

        let mut states = self.states.lock().unwrap();
        match action {
            ServiceAction::IsActive => Ok(states
                .get(&unit)
                .cloned()
                .unwrap_or_else(|| "inactive".to_string())),
            ServiceAction::Start => {
                states.insert(unit, "active".to_string());
                Ok(String::new())
            }
            ServiceAction::Stop => {
                states.insert(unit, "inactive".to_string());
                Ok(String::new())
            }
        }
    }
}
