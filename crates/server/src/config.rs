//! Runtime configuration read from the environment.

use std::str::FromStr;

use thiserror::Error;

/// Environment variable holding the socket address to bind.
pub const LISTEN_ENV: &str = "BULLETIN_LISTEN";
/// Environment variable holding the sqlx SQLite url.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
/// Environment variable holding the pool size.
pub const MAX_CONNECTIONS_ENV: &str = "BULLETIN_DB_MAX_CONNECTIONS";
/// Environment variable switching the sample data on or off.
pub const SEED_ENV: &str = "BULLETIN_SEED";

/// Error raised when an environment variable holds an unusable value.
#[derive(Error, Debug)]
#[error("invalid value `{value}` for {key}: {reason}")]
pub struct ConfigError {
    /// Name of the variable.
    pub key: &'static str,
    /// Raw value found.
    pub value: String,
    /// Why the value was rejected.
    pub reason: String,
}

/// Server configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct Config {
    /// Address the server binds to.
    pub listen_addr: String,
    /// sqlx SQLite url, e.g. `sqlite::memory:` or `sqlite://board.db`.
    pub database_url: String,
    /// Maximum number of pooled connections. In-memory databases always use one.
    pub max_connections: u32,
    /// Load the sample articles and comments at startup when the database holds no article.
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5800".into(),
            database_url: "sqlite::memory:".into(),
            max_connections: 5,
            seed: true,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded environment file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(addr) = lookup(LISTEN_ENV) {
            config.listen_addr = addr;
        }
        if let Some(url) = lookup(DATABASE_URL_ENV) {
            config.database_url = url;
        }
        if let Some(value) = lookup(MAX_CONNECTIONS_ENV) {
            config.max_connections = parse(MAX_CONNECTIONS_ENV, value)?;
        }
        if let Some(value) = lookup(SEED_ENV) {
            config.seed = parse_flag(SEED_ENV, value)?;
        }
        Ok(config)
    }
}

fn parse<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError {
        key,
        reason: e.to_string(),
        value,
    })
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError {
            key,
            value,
            reason: "expected true or false".into(),
        }),
    }
}
