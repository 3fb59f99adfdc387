pub mod credentials;
pub mod rate_limiter;

pub use credentials::{constant_time_equals, AdminCredentials};
pub use rate_limiter::{Clock, ManualClock, SlidingWindowRateLimiter, SystemClock};
