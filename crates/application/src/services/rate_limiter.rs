use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::debug;

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    start: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut offset = self.offset.lock().unwrap_or_else(|e| e.into_inner());
        *offset += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = self.offset.lock().unwrap_or_else(|e| e.into_inner());
        self.start + *offset
    }
}

/// Per-client sliding window: at most `max_requests` accepted requests in
/// any `window`-long span. Rejected requests are not recorded.
pub struct SlidingWindowRateLimiter {
    max_requests: usize,
    window: Duration,
    clock: Arc<dyn Clock>,
    clients: DashMap<String, VecDeque<Instant>>,
}

impl SlidingWindowRateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self::with_clock(max_requests, window, Arc::new(SystemClock))
    }

    pub fn with_clock(max_requests: u32, window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            max_requests: max_requests as usize,
            window,
            clock,
            clients: DashMap::new(),
        }
    }

    pub fn allow(&self, client_key: &str) -> bool {
        let now = self.clock.now();
        let mut requests = self.clients.entry(client_key.to_string()).or_default();

        evict_expired(&mut requests, now, self.window);

        if requests.len() >= self.max_requests {
            return false;
        }

        requests.push_back(now);
        true
    }

    /// Drops clients with no request inside the current window. Returns how
    /// many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let before = self.clients.len();

        self.clients.retain(|_, requests| {
            evict_expired(requests, now, self.window);
            !requests.is_empty()
        });

        let removed = before.saturating_sub(self.clients.len());
        if removed > 0 {
            debug!(removed, remaining = self.clients.len(), "Rate limiter purged idle clients");
        }
        removed
    }

    pub fn tracked_clients(&self) -> usize {
        self.clients.len()
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

fn evict_expired(requests: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&oldest) = requests.front() {
        if now.saturating_duration_since(oldest) >= window {
            requests.pop_front();
        } else {
            break;
        }
    }
}
