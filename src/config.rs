use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "app.db";
const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_SIZE_MB: usize = 10;
const DEFAULT_METRICS_ADDRESS: &str = "127.0.0.1:9090";
const DEFAULT_READ_TIMEOUT_SECS: u64 = 10;
const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 60;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading the server configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),
    #[error("invalid value `{value}` for {name}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings of the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
    /// Directory uploaded object photos are written to.
    pub photos_dir: PathBuf,
    pub max_upload_size_mb: usize,
    /// `host:port` of the separate listener serving `/metrics`.
    pub metrics_address: String,
    /// Time allowed for a client to send the request head.
    pub read_timeout: Duration,
    /// Time allowed for a client to acknowledge the connection shutdown.
    pub write_timeout: Duration,
    /// Keep-alive duration of idle connections.
    pub idle_timeout: Duration,
    /// Grace period for in-flight requests on shutdown.
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let photos_dir = lookup("PHOTOS_DIR")
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::Missing("PHOTOS_DIR"))?;

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            address: lookup("ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            photos_dir: PathBuf::from(photos_dir),
            max_upload_size_mb: parse_or(&lookup, "MAX_UPLOAD_SIZE_MB", DEFAULT_MAX_UPLOAD_SIZE_MB)?,
            metrics_address: lookup("METRICS_ADDRESS")
                .unwrap_or_else(|| DEFAULT_METRICS_ADDRESS.to_string()),
            read_timeout: secs_or(&lookup, "READ_TIMEOUT_SECS", DEFAULT_READ_TIMEOUT_SECS)?,
            write_timeout: secs_or(&lookup, "WRITE_TIMEOUT_SECS", DEFAULT_WRITE_TIMEOUT_SECS)?,
            idle_timeout: secs_or(&lookup, "IDLE_TIMEOUT_SECS", DEFAULT_IDLE_TIMEOUT_SECS)?,
            shutdown_timeout: secs_or(
                &lookup,
                "SHUTDOWN_TIMEOUT_SECS",
                DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            )?,
        })
    }

    /// Upload limit in bytes.
    pub fn max_upload_size_bytes(&self) -> usize {
        self.max_upload_size_mb.saturating_mul(1024 * 1024)
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

fn secs_or<F>(lookup: &F, name: &'static str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    parse_or(lookup, name, default).map(Duration::from_secs)
}
