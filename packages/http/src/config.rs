//! Server configuration, populated from environment variables.

use std::net::SocketAddr;

/// Runtime configuration for the demo server.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `BOOM_BIND` | `0.0.0.0:3000` | TCP socket address to listen on |
/// | `BOOM_ADMIN_TOKEN` | `change-me` | Bearer token required for deletes |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,

    /// Bearer token that authorises destructive requests.
    pub admin_token: String,
}

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BOOM_BIND must be a valid socket address (e.g. 0.0.0.0:3000), got {0:?}")]
    InvalidBind(String),

    #[error("BOOM_ADMIN_TOKEN must not be empty")]
    EmptyAdminToken,
}

impl ServerConfig {
    pub const DEFAULT_BIND: &'static str = "0.0.0.0:3000";
    pub const DEFAULT_ADMIN_TOKEN: &'static str = "change-me";

    /// Populate config from environment variables, applying defaults where absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_bind = lookup("BOOM_BIND").unwrap_or_else(|| Self::DEFAULT_BIND.into());
        let bind_addr = raw_bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind(raw_bind.clone()))?;

        let admin_token =
            lookup("BOOM_ADMIN_TOKEN").unwrap_or_else(|| Self::DEFAULT_ADMIN_TOKEN.into());
        if admin_token.is_empty() {
            return Err(ConfigError::EmptyAdminToken);
        }

        Ok(Self {
            bind_addr,
            admin_token,
        })
    }
}
