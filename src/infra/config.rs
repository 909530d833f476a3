//! Centralized configuration (environment variables + defaults).

use anyhow::{bail, Context, Result};
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Which store implementation the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(StoreBackend::Postgres),
            "memory" | "in-memory" | "inmemory" => Ok(StoreBackend::Memory),
            other => bail!("unknown STORE_BACKEND '{}' (expected postgres or memory)", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => bail!("unknown LOG_FORMAT '{}' (expected pretty or json)", other),
        }
    }
}

fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Store backend (default: postgres).
pub fn store_backend() -> Result<StoreBackend> {
    var("STORE_BACKEND").map_or(Ok(StoreBackend::Postgres), |v| v.parse())
}

/// Database URL. Required for the postgres backend; there is no default.
pub fn database_url() -> Result<String> {
    var("DATABASE_URL").context("DATABASE_URL must be set")
}

/// Pool size (default 5, at least 1).
pub fn db_max_connections() -> Result<u32> {
    match var("DB_MAX_CONNECTIONS") {
        Some(v) => Ok(v
            .trim()
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid u32")?
            .max(1)),
        None => Ok(DEFAULT_MAX_CONNECTIONS),
    }
}

pub fn bind_addr() -> Result<SocketAddr> {
    let raw = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    raw.trim()
        .parse()
        .with_context(|| format!("BIND_ADDR '{}' is not a socket address", raw))
}

/// Default filter directive when `RUST_LOG` is unset.
pub fn log_level() -> String {
    var("LOG_LEVEL").unwrap_or_else(|| "info".to_string())
}

pub fn log_format() -> Result<LogFormat> {
    var("LOG_FORMAT").map_or(Ok(LogFormat::Pretty), |v| v.parse())
}

/// Everything the server needs at startup, resolved once.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    /// Only set for the postgres backend.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let store_backend = store_backend()?;
        let database_url = match store_backend {
            StoreBackend::Postgres => Some(database_url()?),
            StoreBackend::Memory => None,
        };
        Ok(Self {
            store_backend,
            database_url,
            db_max_connections: db_max_connections()?,
            bind_addr: bind_addr()?,
            log_level: log_level(),
            log_format: log_format()?,
        })
    }
}
