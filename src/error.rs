//! Startup error types for health-service.
//!
//! The only handler is infallible and connection-level write errors are
//! dropped by hyper, so errors only come from configuration, binding, and the
//! accept loop itself. `main` logs the chain and exits non-zero; nothing here
//! is retried.

use std::net::SocketAddr;

/// Problems with the environment-provided configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} value `{value}`: expected a TCP port (0-65535)")]
    InvalidPort {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Fatal errors raised while bringing the server up.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The listener could not be bound (address in use, permission denied, ...).
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("http server error")]
    Serve(#[source] std::io::Error),
}
