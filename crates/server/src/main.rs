use anyhow::{Context, Result};
use flare_tvl_core::FlareTvlDashboard;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

mod config;
mod logging;
mod routes;

use config::ServerConfig;
use routes::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;
    logging::init(&config.log_level)?;

    info!("___/******** Flare TVL Dashboard v{} ********\\___", env!("CARGO_PKG_VERSION"));

    let dashboard = config
        .dashboard_settings()
        .and_then(|settings| Ok(FlareTvlDashboard::with_settings(settings)?))
        .inspect_err(|e| error!("invalid dashboard settings: {e:#}"))?;
    info!(?dashboard, "dashboard configured");

    let refresh = dashboard.start();
    let app_state = Arc::new(AppState {
        state: refresh.subscribe(),
        dashboard,
    });

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, routes::router(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    refresh.shutdown().await;
    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("graceful shutdown initiated");
}
