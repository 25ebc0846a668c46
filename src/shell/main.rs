use axum::{ServiceExt, extract::Request};
use tracing_subscriber::{EnvFilter, fmt};

use students::shell::config::AppConfig;
use students::shell::http::app;
use students::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    fmt().with_env_filter(filter).init();

    let state = AppState::in_memory(config.seed);
    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    tracing::info!(seeded = config.seed, "API running on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app(state)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
