//! Storage trait definitions.
//!
//! These traits define the interface for storage backends, enabling swapping
//! between different implementations without changing business logic.

use async_trait::async_trait;

use crate::domain::{NewQuestion, Question, QuestionId};
use crate::error::StorageResult;

/// Persistence operations for questions.
///
/// Each operation maps to exactly one SQL statement on relational backends.
#[async_trait]
pub trait QuestionStorage: Send + Sync {
    /// Insert a new question. The store assigns its id.
    async fn insert(&self, question: &NewQuestion) -> StorageResult<()>;

    /// Overwrite `where_asked` for the given id.
    ///
    /// Returns the number of affected rows; an unknown id is not an error.
    async fn update_where_asked(
        &self,
        id: QuestionId,
        where_asked: Option<&str>,
    ) -> StorageResult<u64>;

    /// Delete the question with the given id.
    ///
    /// Returns the number of affected rows; an unknown id is not an error.
    async fn delete(&self, id: QuestionId) -> StorageResult<u64>;

    /// List all questions ordered by `where_asked` ascending, unset values
    /// first, ties broken by id.
    async fn list(&self) -> StorageResult<Vec<Question>>;

    /// Check if the storage backend is healthy and reachable.
    async fn health_check(&self) -> StorageResult<()>;

    /// Release backend resources. Called once at shutdown.
    async fn close(&self);

    /// Get the storage backend name.
    fn backend_name(&self) -> &'static str;
}
