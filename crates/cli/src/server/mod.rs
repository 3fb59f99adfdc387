pub mod shutdown;
pub mod web;

pub use shutdown::spawn_signal_listener;
pub use web::start_web_server;
