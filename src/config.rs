//! Configuration for health-service.
//!
//! The service has exactly one knob: the TCP port, taken from the `PORT`
//! environment variable. It is resolved once at startup, before any socket is
//! opened, and never changes afterwards.
//!
//! ```text
//! PORT=9090 health-service   # listens on :9090
//! health-service             # listens on :8080
//! ```

use std::net::{Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

/// Environment variable that overrides the listening port.
pub const PORT_ENV: &str = "PORT";

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Config {
    /// Resolve the config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the config through an arbitrary variable lookup.
    ///
    /// An unset, empty, or whitespace-only `PORT` falls back to
    /// [`DEFAULT_PORT`]. Anything else must parse as a `u16`; a malformed
    /// value is an error rather than a silent fallback.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(PORT_ENV).unwrap_or_default();
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }

        let port = raw.parse::<u16>().map_err(|source| ConfigError::InvalidPort {
            var: PORT_ENV,
            value: raw.to_string(),
            source,
        })?;
        Ok(Self { port })
    }

    /// Listening address in `:<port>` form, as it appears in logs.
    pub fn listen_address(&self) -> String {
        format!(":{}", self.port)
    }

    /// Socket address to bind: every IPv4 interface on the configured port.
    ///
    /// IPv6-only clients are refused.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
