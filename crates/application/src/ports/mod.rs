mod service_command_runner;

pub use service_command_runner::ServiceCommandRunner;
