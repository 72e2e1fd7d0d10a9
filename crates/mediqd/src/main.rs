//! MediQ Triage Daemon
//!
//! Serves the conversational triage endpoint for the hospital portal's
//! chat widget, plus health and department directory surfaces.

use anyhow::Result;
use mediqd::config::Config;
use mediqd::server;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("mediqd v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load();
    server::run(config).await
}
