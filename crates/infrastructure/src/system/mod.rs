pub mod systemctl_runner;

pub use systemctl_runner::SystemctlRunner;
