//! Release Radar server.
//!
//! - Config: `RADAR_CONFIG` or `./radar.yaml`, else built-in defaults
//! - Logging: `RUST_LOG`, else `server.log_filter`
//! - Graceful shutdown on Ctrl-C / SIGTERM

use tracing_subscriber::{fmt, EnvFilter};

use radar_core::error::{RadarError, Result};
use radar_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // The subscriber may not be installed yet (config errors).
        eprintln!("radar-server: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = config::resolve_path();
    let cfg = match path.as_deref() {
        Some(p) => config::load_from_file(p)?,
        None => config::RadarConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.server.log_filter));
    fmt().with_env_filter(filter).init();

    tracing::info!(config = path.as_deref().unwrap_or("<built-in defaults>"), "config loaded");

    let listen = cfg.server.listen_addr()?;
    let state = AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "radar-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| RadarError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RadarError::Internal(format!("server failed: {e}")))?;

    tracing::info!("radar-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
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
    tracing::info!("signal received, starting graceful shutdown");
}
