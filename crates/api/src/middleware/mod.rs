pub mod basic_auth;
pub mod client_addr;
pub mod rate_limit;
pub mod recover;
pub mod security_headers;

pub use basic_auth::{require_basic_auth, AUTH_REALM};
pub use client_addr::{client_key, remote_addr};
pub use rate_limit::enforce_rate_limit;
pub use recover::recover_panics;
pub use security_headers::apply_security_headers;
