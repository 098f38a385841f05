use anyhow::Context;
use tracing::error;

mod api;
mod config;
mod error;
mod server;

use config::Config;

#[tokio::main]
async fn main() {
    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "health_service=info,tower_http=info".into()),
        )
        .init();

    // Bind and listen failures are fatal: log the whole chain and exit non-zero.
    if let Err(e) = start().await {
        error!("health-service failed: {e:#}");
        std::process::exit(1);
    }
}

async fn start() -> anyhow::Result<()> {
    let config = Config::from_env().context("loading configuration from environment")?;
    server::run(config).await.context("http server stopped")?;
    Ok(())
}
