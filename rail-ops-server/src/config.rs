//! Deployment configuration for the server.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Environment variable for the bind address.
pub const HOST_VAR: &str = "RAIL_OPS_HOST";

/// Environment variable for the bind port.
pub const PORT_VAR: &str = "RAIL_OPS_PORT";

/// Environment variable for an alternative JSON dataset.
pub const DATA_VAR: &str = "RAIL_OPS_DATA";

/// Errors from reading configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid RAIL_OPS_HOST {0:?}: expected an IP address")]
    InvalidHost(String),

    #[error("invalid RAIL_OPS_PORT {0:?}: expected a port number")]
    InvalidPort(String),
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub host: IpAddr,

    /// Port to listen on.
    pub port: u16,

    /// JSON dataset to serve instead of the built-in snapshot.
    pub data_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let host: IpAddr = match get(HOST_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => defaults.host,
        };

        let port: u16 = match get(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        Ok(Self {
            host,
            port,
            data_path: get(DATA_VAR).map(PathBuf::from),
        })
    }

    /// The socket address to bind.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            data_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn default_config() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8000");
        assert_eq!(config.data_path, None);
    }

    #[test]
    fn custom_config() {
        let config = config_from(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, " 3000 "),
            (DATA_VAR, "/srv/rail/data.json"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.data_path, Some(PathBuf::from("/srv/rail/data.json")));
    }

    #[test]
    fn empty_values_use_defaults() {
        let config = config_from(&[(HOST_VAR, ""), (PORT_VAR, "  "), (DATA_VAR, "")]).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn ipv6_host() {
        let config = config_from(&[(HOST_VAR, "::1")]).unwrap();
        assert_eq!(config.bind_addr().to_string(), "[::1]:8000");
    }

    #[test]
    fn invalid_values() {
        assert_eq!(
            config_from(&[(HOST_VAR, "localhost")]),
            Err(ConfigError::InvalidHost("localhost".into()))
        );
        assert_eq!(
            config_from(&[(PORT_VAR, "70000")]),
            Err(ConfigError::InvalidPort("70000".into()))
        );
        assert_eq!(
            config_from(&[(PORT_VAR, "eighty")]),
            Err(ConfigError::InvalidPort("eighty".into()))
        );
    }

    #[test]
    fn error_display() {
        let err = ConfigError::InvalidPort("x".into());
        assert_eq!(
            err.to_string(),
            "invalid RAIL_OPS_PORT \"x\": expected a port number"
        );
    }
}
