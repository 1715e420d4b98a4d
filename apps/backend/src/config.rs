//! Environment-driven configuration

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },

    #[error("either DATABASE_URL or CORPUS_PATH must be set")]
    MissingVerseSource,
}

/// Where verses are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerseSourceConfig {
    Database(String),
    Corpus(PathBuf),
}

/// Server configuration.
///
/// Env vars:
/// - HOST, PORT: listen address (default 0.0.0.0:3000)
/// - DATABASE_URL: PostgreSQL connection string
/// - CORPUS_PATH: JSON corpus file, used when DATABASE_URL is unset
/// - STORE_TIMEOUT_MS: verse store read timeout (default 5000)
/// - DB_MAX_CONNECTIONS: pool size (default 10)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub verse_source: VerseSourceConfig,
    pub store_timeout: Duration,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let verse_source = match (non_empty("DATABASE_URL"), non_empty("CORPUS_PATH")) {
            (Some(url), _) => VerseSourceConfig::Database(url),
            (None, Some(path)) => VerseSourceConfig::Corpus(PathBuf::from(path)),
            (None, None) => return Err(ConfigError::MissingVerseSource),
        };

        Ok(Self {
            host: non_empty("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
            verse_source,
            store_timeout: Duration::from_millis(parse_or(&lookup, "STORE_TIMEOUT_MS", 5000)?),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        _ => Ok(default),
    }
}
