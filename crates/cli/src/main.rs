use clap::Parser;
use std::sync::Arc;
use sysdwitch_api::{create_app, AppState};
use sysdwitch_application::services::{AdminCredentials, SlidingWindowRateLimiter};
use sysdwitch_domain::CliOverrides;
use sysdwitch_jobs::{JobRunner, RateLimitSweepJob};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "sysdwitch")]
#[command(version)]
#[command(about = "sysdwitch - web panel for starting and stopping user systemd services")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Bind host
    #[arg(long)]
    host: Option<String>,

    /// Web server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Comma-separated list of services that may be controlled
    #[arg(long, value_name = "LIST")]
    allowed_services: Option<String>,

    /// Directory served under /static
    #[arg(long, value_name = "DIR")]
    static_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        host: cli.host,
        port: cli.port,
        allowed_services: cli.allowed_services,
        static_dir: cli.static_dir,
        log_level: cli.log_level,
    };

    let config = match bootstrap::load_config(cli.config.as_deref(), cli_overrides) {
        Ok(config) => config,
        Err(e) => {
            bootstrap::init_default_logging();
            error!(error = %e, "Invalid configuration");
            return Err(e);
        }
    };

    bootstrap::init_logging(&config);

    info!("Starting sysdwitch v{}", env!("CARGO_PKG_VERSION"));

    let (username, password) = config.auth.credentials()?;
    let credentials = Arc::new(AdminCredentials::new(username, password));
    let use_cases = di::UseCases::new(&config)?;

    let shutdown = CancellationToken::new();
    server::spawn_signal_listener(shutdown.clone());

    let rate_limiter = config.rate_limit.enabled.then(|| {
        Arc::new(SlidingWindowRateLimiter::new(
            config.rate_limit.max_requests,
            config.rate_limit.window(),
        ))
    });

    let mut jobs = JobRunner::new().with_shutdown_token(shutdown.clone());
    if let Some(limiter) = &rate_limiter {
        info!(
            max_requests = config.rate_limit.max_requests,
            window_secs = config.rate_limit.window_secs,
            trust_proxy_headers = config.rate_limit.trust_proxy_headers,
            "Rate limiting enabled"
        );
        jobs = jobs.with_rate_limit_sweep(RateLimitSweepJob::new(limiter.clone()));
    }
    jobs.start().await;

    let app_state = AppState {
        get_all_services_status: use_cases.get_all_services_status,
        control_service: use_cases.control_service,
        credentials,
        rate_limiter,
        trust_proxy_headers: config.rate_limit.trust_proxy_headers,
        static_dir: config.server.static_dir.clone().into(),
        request_timeout: config.server.request_timeout(),
    };

    let result = server::start_web_server(
        &config.server.bind_address(),
        create_app(app_state),
        shutdown.clone(),
        config.server.shutdown_grace(),
    )
    .await;

    shutdown.cancel();
    result?;

    info!("Server shutdown complete");
    Ok(())
}
