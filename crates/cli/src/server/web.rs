use axum::Router;
use std::net::SocketAddr;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Serves `app` until `shutdown` fires, then gives in-flight requests `grace`
/// to finish. Running past the grace period is reported as an error.
pub async fn start_web_server(
    bind_addr: &str,
    app: Router,
    shutdown: CancellationToken,
    grace: Duration,
) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(
        bind_address = %local_addr,
        dashboard_url = format!("http://{}", local_addr),
        api_url = format!("http://{}/api", local_addr),
        "Starting web server"
    );

    let signal = shutdown.clone();
    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move { signal.cancelled().await });

    let mut serve = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut serve => {
            result??;
            return Ok(());
        }
        _ = shutdown.cancelled() => {}
    }

    info!(
        grace_secs = grace.as_secs(),
        "Waiting for in-flight requests to finish"
    );

    match tokio::time::timeout(grace, &mut serve).await {
        Ok(result) => {
            result??;
            info!("Web server stopped");
            Ok(())
        }
        Err(_) => {
            serve.abort();
            error!(
                grace_secs = grace.as_secs(),
                "Grace period elapsed, forcing shutdown"
            );
            anyhow::bail!("forced shutdown after {}s grace period", grace.as_secs())
        }
    }
}
