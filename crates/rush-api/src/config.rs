//! Startup configuration read from the environment.

use std::net::SocketAddr;

use rush_store::schema::{DEFAULT_TABLE, validate_table_name};

use crate::error::AppError;

const DEFAULT_DATABASE_URL: &str = "sqlite://rush.db";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `SQLite` URL of the puzzle dataset (`DATABASE_URL`).
    pub database_url: String,
    /// Table holding the puzzles (`RUSH_TABLE`).
    pub table: String,
    /// Bind host (`HOST`).
    pub host: String,
    /// Bind port (`PORT`).
    pub port: u16,
    /// Upper bound on pooled dataset connections (`DATABASE_MAX_CONNECTIONS`).
    pub max_connections: u32,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if any variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset keys.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if any value is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let table = lookup("RUSH_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string());
        validate_table_name(&table).map_err(|e| AppError::Config(format!("RUSH_TABLE: {e}")))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse().map_err(|e| {
                AppError::Config(format!("DATABASE_MAX_CONNECTIONS must be a valid u32: {e}"))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            return Err(AppError::Config(
                "DATABASE_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            database_url,
            table,
            host,
            port,
            max_connections,
        })
    }

    /// The address to bind the listener to.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host` and `port` do not form a valid
    /// socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.database_url, "sqlite://rush.db");
        assert_eq!(config.table, "rush");
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite:///srv/data/rush.db"),
            ("RUSH_TABLE", "puzzles"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
        ])
        .unwrap();

        assert_eq!(config.database_url, "sqlite:///srv/data/rush.db");
        assert_eq!(config.table, "puzzles");
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let result = config_from(&[("PORT", "70000")]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_invalid_table_is_config_error() {
        let result = config_from(&[("RUSH_TABLE", "rush; --")]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_zero_connections_is_config_error() {
        let result = config_from(&[("DATABASE_MAX_CONNECTIONS", "0")]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_bad_host_fails_socket_addr() {
        let config = config_from(&[("HOST", "not a host")]).unwrap();
        assert!(matches!(config.socket_addr(), Err(AppError::Config(_))));
    }
}
