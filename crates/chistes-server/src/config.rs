//! Server configuration read from environment variables.
//!
//! - `PORT`: listen port (default: 3000)
//! - `CHISTES_DB_PATH`: SQLite database path (default: "chistes.db");
//!   `:memory:` selects the in-memory store
//! - `CHISTES_CHUCK_URL`: Chuck Norris joke endpoint
//! - `CHISTES_DAD_URL`: dad joke endpoint

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_PATH: &str = "chistes.db";
pub const DEFAULT_CHUCK_URL: &str = "https://api.chucknorris.io/jokes/random";
pub const DEFAULT_DAD_URL: &str = "https://icanhazdadjoke.com/";

/// Database path that selects [`chistes_storage::InMemoryStore`].
pub const IN_MEMORY_DB: &str = ":memory:";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value '{value}': expected an integer in 0..=65535")]
    InvalidPort { value: String },
}

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub db_path: String,
    pub chuck_url: String,
    pub dad_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT,
            db_path: DEFAULT_DB_PATH.to_string(),
            chuck_url: DEFAULT_CHUCK_URL.to_string(),
            dad_url: DEFAULT_DAD_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup. Unset or empty
    /// values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = ServerConfig::default();

        let port = match get("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => return Err(ConfigError::InvalidPort { value: raw }),
            },
            None => defaults.port,
        };

        Ok(ServerConfig {
            port,
            db_path: get("CHISTES_DB_PATH").unwrap_or(defaults.db_path),
            chuck_url: get("CHISTES_CHUCK_URL").unwrap_or(defaults.chuck_url),
            dad_url: get("CHISTES_DAD_URL").unwrap_or(defaults.dad_url),
        })
    }

    /// Socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn uses_in_memory_store(&self) -> bool {
        self.db_path == IN_MEMORY_DB
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert!(!config.uses_in_memory_store());
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("CHISTES_DB_PATH", ":memory:"),
            ("CHISTES_DAD_URL", "http://localhost:9000/"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.uses_in_memory_store());
        assert_eq!(config.dad_url, "http://localhost:9000/");
        assert_eq!(config.chuck_url, DEFAULT_CHUCK_URL);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidPort {
                value: "eighty".into()
            }
        );
    }
}
