use std::sync::Arc;
use std::time::Duration;
use sysdwitch_application::services::SlidingWindowRateLimiter;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically drops rate limiter entries for clients that went quiet, so
/// the per-client map does not grow with every address ever seen.
pub struct RateLimitSweepJob {
    limiter: Arc<SlidingWindowRateLimiter>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl RateLimitSweepJob {
    /// Sweeps once per limiter window by default.
    pub fn new(limiter: Arc<SlidingWindowRateLimiter>) -> Self {
        let interval = limiter.window();
        Self {
            limiter,
            interval,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            "Starting rate limiter sweep job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            loop {
                tokio::select! {
                    biased;
                    _ = self.shutdown.cancelled() => {
                        info!("RateLimitSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.limiter.purge_expired();
                        debug!(
                            removed,
                            tracked = self.limiter.tracked_clients(),
                            "Rate limiter sweep completed"
                        );
                    }
                }
            }
        });
    }
}
