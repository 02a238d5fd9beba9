//! Binary entrypoint for the algoviz HTTP server.
//!
//! Configuration comes from `ALGOVIZ_*` environment variables (see
//! [`algoviz_server::config`]); log filtering from `RUST_LOG`, defaulting to
//! `info`.

use algoviz_server::config::ServerConfig;
use algoviz_server::router::build_router;
use algoviz_server::state::AppState;
use anyhow::Context;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(config.limits);
    let app = build_router(state);

    let addr = config.bind_addr();
    tracing::info!("algoviz server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
