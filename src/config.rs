//! Process configuration, read once from the environment at startup.

use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_POOL_SIZE: usize = 16;

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),

    #[error("Invalid HOST value '{0}'")]
    InvalidHost(String),
}

/// Server and document store configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub host: IpAddr,

    /// Port the HTTP server binds to
    pub port: u16,

    /// Connection URL of the document database
    pub database_url: Option<String>,

    /// Database name, overrides the one in `database_url`
    pub database_name: Option<String>,

    /// Maximum number of connections in the pool
    pub max_pool_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            database_url: None,
            database_name: None,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
        }
    }
}

impl AppConfig {
    /// Read `HOST`, `PORT`, `DATABASE_URL` and `DATABASE_NAME` from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let host = match get("HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => defaults.host,
        };

        Ok(Self {
            host,
            port,
            database_url: get("DATABASE_URL"),
            database_name: get("DATABASE_NAME"),
            ..defaults
        })
    }

    /// Persistence is only attempted when both the URL and the database name are set
    pub fn persistence_configured(&self) -> bool {
        self.database_url.is_some() && self.database_name.is_some()
    }
}
