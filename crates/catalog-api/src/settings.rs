//! Server configuration
//!
//! Sources are layered in this order, later ones winning:
//!
//! 1. built-in defaults
//! 2. an optional TOML file (`catalog.toml` unless a path is given)
//! 3. environment variables prefixed with `CATALOG`, nested with `__`
//!    (e.g. `CATALOG__SERVER__PORT=8080`, `CATALOG__STORAGE__BACKEND=sqlite`)

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Config error: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Configuration result type
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which repository implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Sqlite,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Only read by the sqlite backend
    pub database_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl AppConfig {
    /// Load from `catalog.toml` (if present) and the environment
    pub fn load() -> SettingsResult<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load from the given file (if present) and the environment
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("storage.backend", "memory")?
            .set_default("storage.database_path", "catalog.db")?
            .set_default("logging.filter", "info")?
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("CATALOG")
                    .prefix_separator("__")
                    .separator("__"),
            );

        let app_config: AppConfig = builder.build()?.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(SettingsError::Validation(
                "server.host must not be empty".to_string(),
            ));
        }
        if self.storage.backend == StorageBackend::Sqlite
            && self.storage.database_path.as_os_str().is_empty()
        {
            return Err(SettingsError::Validation(
                "storage.database_path is required for the sqlite backend".to_string(),
            ));
        }
        Ok(())
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> SettingsResult<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|err| SettingsError::Validation(format!("invalid bind address: {err}")))
    }
}
