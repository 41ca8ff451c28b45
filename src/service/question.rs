//! Question service.
//!
//! Thin business layer over [`QuestionStorage`]: one storage call per
//! operation, plus the notification step after a listing.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{NewQuestion, Question, QuestionId};
use crate::error::Result;
use crate::service::notifier::QuestionNotifier;
use crate::storage::traits::QuestionStorage;

/// Service for question CRUD operations.
pub struct QuestionService {
    /// Storage backend.
    storage: Arc<dyn QuestionStorage>,
    /// Receives every listing result.
    notifier: Arc<dyn QuestionNotifier>,
}

impl QuestionService {
    /// Create a new question service.
    pub fn new(storage: Arc<dyn QuestionStorage>, notifier: Arc<dyn QuestionNotifier>) -> Self {
        Self { storage, notifier }
    }

    /// Store a new question.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn create(&self, question: NewQuestion) -> Result<()> {
        self.storage.insert(&question).await?;
        debug!(description_url = %question.description_url, "Question created");
        Ok(())
    }

    /// Set (or clear) where a question was asked.
    ///
    /// Unknown ids are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn update_where_asked(&self, id: QuestionId, where_asked: Option<String>) -> Result<()> {
        let affected = self
            .storage
            .update_where_asked(id, where_asked.as_deref())
            .await?;
        debug!(question_id = %id, affected, "Question updated");
        Ok(())
    }

    /// Delete a question. Unknown ids are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn delete(&self, id: QuestionId) -> Result<()> {
        let affected = self.storage.delete(id).await?;
        debug!(question_id = %id, affected, "Question deleted");
        Ok(())
    }

    /// List all questions ordered by `where_asked`, then notify about each one.
    ///
    /// Notification is dispatched without being awaited and never affects the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub async fn list(&self) -> Result<Vec<Question>> {
        let questions = self.storage.list().await?;
        info!(count = questions.len(), "Questions listed");

        self.notifier.notify(&questions);

        Ok(questions)
    }
}
