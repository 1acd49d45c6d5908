//! Server bootstrap: storage selection, router, listener

use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

use catalog_domain::repositories::CategoryRepository;
use catalog_persistence::{
    category_in_memory_repository, open_database, InMemoryStore, PersistenceError,
    SqliteCategoryRepository,
};

use crate::{
    routes,
    settings::{AppConfig, SettingsError, StorageBackend, StorageConfig},
    state::AppState,
};

/// Errors raised while starting or running the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Storage error: {0}")]
    Storage(#[from] PersistenceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the repository selected by the storage configuration
pub fn build_repository(
    storage: &StorageConfig,
) -> Result<Arc<dyn CategoryRepository>, ServerError> {
    match storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory category storage");
            Ok(Arc::new(category_in_memory_repository(InMemoryStore::new())?))
        }
        StorageBackend::Sqlite => {
            if let Some(parent) = storage.database_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            info!(path = %storage.database_path.display(), "Using SQLite category storage");
            let conn = open_database(&storage.database_path)?;
            Ok(Arc::new(SqliteCategoryRepository::new(conn)))
        }
    }
}

/// HTTP server for the category API
pub struct ApiServer {
    config: AppConfig,
    state: AppState,
}

impl ApiServer {
    pub fn new(config: AppConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Wire storage and use cases from configuration
    pub fn from_config(config: AppConfig) -> Result<Self, ServerError> {
        let repository = build_repository(&config.storage)?;
        Ok(Self::new(config, AppState::new(repository)))
    }

    pub fn router(&self) -> Router {
        routes::app(self.state.clone())
    }

    /// Bind and serve until the process receives ctrl-c
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.bind_addr()?;
        let listener = TcpListener::bind(addr).await?;
        info!(address = %addr, "Starting catalog API server");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}
