pub mod rate_limit_sweep;
pub mod runner;

pub use rate_limit_sweep::RateLimitSweepJob;
pub use runner::JobRunner;
