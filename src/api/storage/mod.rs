//! Storage module for the API.
//!
//! Provides the PostgreSQL backend used in production and an in-memory backend
//! for local development and tests.

pub mod error;
pub mod traits;

// Storage backend implementations
pub mod memory;
pub mod postgres;

pub use error::StorageError;
pub use memory::InMemoryStorageBackend;
pub use postgres::PostgresStorageBackend;
pub use traits::{Collection, StorageBackend};

use crate::config::AppConfig;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::{info, warn};

/// Build the storage backend described by `config`.
///
/// Connects to PostgreSQL and runs migrations when `DATABASE_URL` is set,
/// otherwise falls back to the in-memory backend.
pub async fn connect(config: &AppConfig) -> Result<Arc<dyn StorageBackend>, StorageError> {
    let Some(database_url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL not set, using in-memory storage (data is lost on restart)");
        return Ok(Arc::new(InMemoryStorageBackend::new()));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(database_url)
        .await
        .map_err(|e| {
            StorageError::Connection(format!("Failed to connect to database: {}", e))
        })?;

    let backend = PostgresStorageBackend::new(pool);
    backend.migrate().await?;
    info!(
        "Connected to PostgreSQL (max_connections={})",
        config.database_max_connections
    );

    Ok(Arc::new(backend))
}
