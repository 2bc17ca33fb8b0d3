use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const ENV_DATA: &str = "LAUNCH_DASH_DATA";
pub const ENV_ADDR: &str = "LAUNCH_DASH_ADDR";

pub const DEFAULT_DATA: &str = "spacex_launch_dash.csv";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8050";

/// Process configuration. The dashboard takes no command-line flags; both
/// settings come from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Launch table to load at startup.
    pub data_path: PathBuf,
    /// Address the HTTP server binds.
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_path = get(ENV_DATA)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA));

        let addr = get(ENV_ADDR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::BindAddr {
                value: addr.clone(),
                source,
            })?;

        Ok(Config {
            data_path,
            bind_addr,
        })
    }
}
