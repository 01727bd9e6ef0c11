use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;

mod api;
mod config;
mod tmux;

use api::AppState;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Config::parse();
    let tmux = config.tmux_client();

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        tmux = tmux.tmux_path(),
        "tmux-api listening"
    );

    // Serves until the process is killed; there is no graceful shutdown.
    axum::serve(listener, api::router(AppState::new(tmux)))
        .await
        .context("HTTP server failed")?;

    Ok(())
}
