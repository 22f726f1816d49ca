//! Server configuration, loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use mergington::errors::ConfigError;

pub const HOST_VAR: &str = "MERGINGTON_HOST";
pub const PORT_VAR: &str = "MERGINGTON_PORT";

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(HOST_VAR) {
            config.host = value
                .trim()
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                    key: HOST_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
        }

        if let Some(value) = lookup(PORT_VAR) {
            config.port = value
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                    key: PORT_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
