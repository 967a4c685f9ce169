//! Server configuration
//!
//! Read from the environment (`BIND_ADDRESS`, `DATABASE_URL`,
//! `DATABASE_MAX_CONNECTIONS`, `STATIC_DIR`) on top of built-in defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/todos.db";
pub const DEFAULT_MAX_CONNECTIONS: i64 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub database_url: String,
    pub database_max_connections: u32,
    /// Directory with the browser client, served for non-API paths
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        Self::from_env(::config::Environment::default())
    }

    fn from_env(env: ::config::Environment) -> Result<Self> {
        let settings = ::config::Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("database_max_connections", DEFAULT_MAX_CONNECTIONS)?
            .add_source(env)
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> ::config::Environment {
        let map: ::config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ::config::Environment::default().source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_env(env(&[])).unwrap();
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.database_max_connections, 5);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_environment_overrides() {
        let config = ServerConfig::from_env(env(&[
            ("BIND_ADDRESS", "127.0.0.1:8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("STATIC_DIR", "/srv/todo"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.database_max_connections, 2);
        assert_eq!(config.static_dir, Some(PathBuf::from("/srv/todo")));
    }

    #[test]
    fn test_rejects_bad_pool_size() {
        assert!(ServerConfig::from_env(env(&[("DATABASE_MAX_CONNECTIONS", "many")])).is_err());
    }
}
