//! Listener setup and the serve loop.
//!
//! There is no shutdown path: [`run`] only returns if binding fails or the
//! accept loop dies. Each accepted connection is driven on its own tokio task
//! by `axum::serve`.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::{api, config::Config, error::StartupError};

/// Bind a TCP listener on `addr`. Failure is fatal and never retried.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, StartupError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })
}

/// Serve `app` on `listener` until the process is killed.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), StartupError> {
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}

/// Bind the configured address and serve the health router on it.
pub async fn run(config: Config) -> Result<(), StartupError> {
    let addr = config.bind_addr();
    info!(%addr, "starting http server on {}", config.listen_address());

    let listener = bind(addr).await?;
    serve(listener, api::router()).await
}
