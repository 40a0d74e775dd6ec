//! Server configuration from environment variables (a `.env` file is honoured by `main`).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://plants.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5555";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// SQLite URL. The database file is created when missing.
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}

impl ServerConfig {
    /// Read `DATABASE_URL`, `BIND_ADDR` and `DATABASE_MAX_CONNECTIONS`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DATABASE_MAX_CONNECTIONS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(ServerConfig {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}
