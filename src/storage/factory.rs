//! Storage backend factory.
//!
//! Creates the appropriate storage backend based on configuration.

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::AppError;
use crate::storage::memory::MemoryStorage;
use crate::storage::postgres::PostgresStorage;
use crate::storage::traits::QuestionStorage;

/// Create a storage backend based on configuration.
///
/// # Errors
///
/// Returns an error if the storage backend cannot be initialized or fails its
/// first health check.
pub async fn create_storage(config: &StorageConfig) -> Result<Arc<dyn QuestionStorage>, AppError> {
    let storage: Arc<dyn QuestionStorage> = match config.backend {
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
        StorageBackend::PostgreSQL => Arc::new(PostgresStorage::connect(&config.postgresql).await?),
    };

    // Verify storage is healthy
    storage.health_check().await?;

    Ok(storage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_memory_storage() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            ..Default::default()
        };

        let storage = create_storage(&config).await.unwrap();
        assert_eq!(storage.backend_name(), "memory");
    }

    #[tokio::test]
    async fn test_create_postgres_storage_with_bad_url_fails() {
        let mut config = StorageConfig::default();
        config.postgresql.url = "not-a-database-url".to_string();

        let result = create_storage(&config).await;
        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
