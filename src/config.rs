//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Store Connection
//!
//! Either a full URL:
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! ```
//!
//! or individual components (all optional):
//!
//! ```bash
//! export REDIS_HOST="localhost"
//! export REDIS_PORT="6379"
//! export REDIS_PASSWORD=""
//! export REDIS_DB="0"
//! ```
//!
//! ## Optional Variables
//!
//! - `STORE_BACKEND` - `redis` or `memory` (default: `redis`)
//! - `STORE_CONNECT_RETRIES` - Retries for the initial store connection (default: 3, max: 10)
//! - `LISTEN` - Bind address (default: `127.0.0.1:5000`)
//! - `SERVE_STATIC` - Serve `/static/*` from `STATIC_DIR` (default: `true`)
//! - `STATIC_DIR` - Static asset directory (default: `static`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

const DEFAULT_REDIS_HOST: &str = "localhost";
const DEFAULT_REDIS_PORT: &str = "6379";

/// Which key-value store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "redis" => Ok(Self::Redis),
            "memory" => Ok(Self::Memory),
            other => anyhow::bail!("STORE_BACKEND must be 'redis' or 'memory', got '{}'", other),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: String,
    pub store_backend: StoreBackend,
    /// Number of retries after the first failed connection attempt.
    pub store_connect_retries: usize,
    pub listen_addr: String,
    pub serve_static: bool,
    pub static_dir: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `STORE_BACKEND` names an unknown backend or
    /// `STORE_CONNECT_RETRIES` is not a non-negative integer.
    pub fn from_env() -> Result<Self> {
        let redis_url = Self::load_redis_url();

        let store_backend = match env::var("STORE_BACKEND") {
            Ok(value) => StoreBackend::parse(&value)?,
            Err(_) => StoreBackend::Redis,
        };

        let store_connect_retries = match env::var("STORE_CONNECT_RETRIES") {
            Ok(value) => value.trim().parse::<usize>().map_err(|_| {
                anyhow::anyhow!(
                    "STORE_CONNECT_RETRIES must be a non-negative integer, got '{}'",
                    value
                )
            })?,
            Err(_) => 3,
        };

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:5000".to_string());

        let serve_static = env::var("SERVE_STATIC")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(true);

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            redis_url,
            store_backend,
            store_connect_retries,
            listen_addr,
            serve_static,
            static_dir,
            log_level,
            log_format,
        })
    }

    /// Loads Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`,
    ///    defaulting to `redis://localhost:6379/0`
    fn load_redis_url() -> String {
        if let Ok(url) = env::var("REDIS_URL") {
            return url;
        }

        let host = env::var("REDIS_HOST").unwrap_or_else(|_| DEFAULT_REDIS_HOST.to_string());
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| DEFAULT_REDIS_PORT.to_string());
        let password = env::var("REDIS_PASSWORD").ok();
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        match password {
            // Empty password means no authentication
            Some(pwd) if !pwd.is_empty() => format!("redis://:{}@{}:{}/{}", pwd, host, port, db),
            _ => format!("redis://{}:{}/{}", host, port, db),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `redis_url` does not use `redis://` or `rediss://`
    /// - `store_connect_retries` is above 10
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.store_backend == StoreBackend::Redis
            && !self.redis_url.starts_with("redis://")
            && !self.redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                mask_connection_string(&self.redis_url)
            );
        }

        if self.store_connect_retries > 10 {
            anyhow::bail!(
                "STORE_CONNECT_RETRIES must be at most 10, got {}",
                self.store_connect_retries
            );
        }

        if self.serve_static && self.static_dir.is_empty() {
            anyhow::bail!("STATIC_DIR must not be empty when SERVE_STATIC is enabled");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match self.store_backend {
            StoreBackend::Redis => tracing::info!(
                "  Store: redis at {} ({} connect retries)",
                mask_connection_string(&self.redis_url),
                self.store_connect_retries
            ),
            StoreBackend::Memory => tracing::info!("  Store: in-memory (not persisted)"),
        }

        if self.serve_static {
            tracing::info!("  Static files: {}", self.static_dir);
        } else {
            tracing::info!("  Static files: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks the password in a connection string.
///
/// `redis://:secret@host:6379/0` becomes `redis://:***@host:6379/0`.
pub fn mask_connection_string(url: &str) -> String {
    if let Some(at_pos) = url.rfind('@')
        && let Some(scheme_end) = url.find("://")
    {
        let credentials = &url[scheme_end + 3..at_pos];
        if let Some(colon) = credentials.find(':') {
            return format!(
                "{}{}:***{}",
                &url[..scheme_end + 3],
                &credentials[..colon],
                &url[at_pos..]
            );
        }
    }

    url.to_string()
}
