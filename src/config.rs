//! Server configuration

use crate::error::ConfigError;
use std::net::SocketAddr;

/// Environment variable overriding the listen address
pub const ADDR_VAR: &str = "DRYMEASURES_ADDR";
/// Environment variable toggling the startup records
pub const SEED_VAR: &str = "DRYMEASURES_SEED";

/// Web server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// Address the HTTP server binds to
    pub addr: SocketAddr,
    /// Whether the store starts with the two sample records
    pub seed: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            addr: SocketAddr::from(([127, 0, 0, 1], 10000)),
            seed: true,
        }
    }
}

impl WebConfig {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = WebConfig::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidVar { var: ADDR_VAR, value })?;
        }

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidVar { var: SEED_VAR, value }),
            };
        }

        Ok(config)
    }
}
