//! In-memory storage backend.
//!
//! Keeps questions in a map guarded by a `parking_lot` lock. Suitable for
//! development and tests; nothing survives a restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{NewQuestion, Question, QuestionId, listing_order};
use crate::error::{StorageError, StorageResult};
use crate::storage::traits::QuestionStorage;

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    rows: BTreeMap<QuestionId, Question>,
    closed: bool,
}

/// In-memory question storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: RwLock<Inner>,
}

impl MemoryStorage {
    /// Create an empty store. Ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestionStorage for MemoryStorage {
    async fn insert(&self, question: &NewQuestion) -> StorageResult<()> {
        let mut inner = self.inner.write();
        if inner.closed {
            return Err(StorageError::Unavailable);
        }

        inner.next_id = inner
            .next_id
            .checked_add(1)
            .ok_or_else(|| StorageError::Query("question id sequence exhausted".to_string()))?;
        let id = QuestionId(inner.next_id);

        inner.rows.insert(
            id,
            Question {
                id,
                description_url: question.description_url.clone(),
                coding_round: question.coding_round.clone(),
                where_asked: None,
            },
        );
        Ok(())
    }

    async fn update_where_asked(
        &self,
        id: QuestionId,
        where_asked: Option<&str>,
    ) -> StorageResult<u64> {
        let mut inner = self.inner.write();
        if inner.closed {
            return Err(StorageError::Unavailable);
        }

        Ok(inner.rows.get_mut(&id).map_or(0, |row| {
            row.where_asked = where_asked.map(ToString::to_string);
            1
        }))
    }

    async fn delete(&self, id: QuestionId) -> StorageResult<u64> {
        let mut inner = self.inner.write();
        if inner.closed {
            return Err(StorageError::Unavailable);
        }

        Ok(u64::from(inner.rows.remove(&id).is_some()))
    }

    async fn list(&self) -> StorageResult<Vec<Question>> {
        let inner = self.inner.read();
        if inner.closed {
            return Err(StorageError::Unavailable);
        }

        let mut questions: Vec<Question> = inner.rows.values().cloned().collect();
        questions.sort_by(listing_order);
        Ok(questions)
    }

    async fn health_check(&self) -> StorageResult<()> {
        if self.inner.read().closed {
            return Err(StorageError::Unavailable);
        }
        Ok(())
    }

    async fn close(&self) {
        self.inner.write().closed = true;
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> MemoryStorage {
        let storage = MemoryStorage::new();
        storage.insert(&NewQuestion::new("http://a", "1")).await.unwrap();
        storage.insert(&NewQuestion::new("http://b", "2")).await.unwrap();
        storage.insert(&NewQuestion::new("http://c", "3")).await.unwrap();
        storage
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let storage = seeded().await;
        let ids: Vec<i32> = storage.list().await.unwrap().iter().map(|q| q.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_changes_only_where_asked_of_target() {
        let storage = seeded().await;
        let affected = storage
            .update_where_asked(QuestionId(2), Some("Company A"))
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let questions = storage.list().await.unwrap();
        let updated = questions.iter().find(|q| q.id == QuestionId(2)).unwrap();
        assert_eq!(updated.where_asked.as_deref(), Some("Company A"));
        assert_eq!(updated.description_url, "http://b");
        assert_eq!(updated.coding_round, "2");
        assert!(
            questions
                .iter()
                .filter(|q| q.id != QuestionId(2))
                .all(|q| q.where_asked.is_none())
        );
    }

    #[tokio::test]
    async fn test_unknown_ids_affect_nothing() {
        let storage = seeded().await;
        assert_eq!(
            storage
                .update_where_asked(QuestionId(99), Some("x"))
                .await
                .unwrap(),
            0
        );
        assert_eq!(storage.delete(QuestionId(99)).await.unwrap(), 0);
        assert_eq!(storage.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_row() {
        let storage = seeded().await;
        assert_eq!(storage.delete(QuestionId(1)).await.unwrap(), 1);

        let ids: Vec<i32> = storage.list().await.unwrap().iter().map(|q| q.id.0).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let storage = seeded().await;
        storage.delete(QuestionId(3)).await.unwrap();
        storage.insert(&NewQuestion::new("http://d", "4")).await.unwrap();

        let ids: Vec<i32> = storage.list().await.unwrap().iter().map(|q| q.id.0).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[tokio::test]
    async fn test_list_sorted_by_where_asked() {
        let storage = seeded().await;
        storage
            .update_where_asked(QuestionId(1), Some("Zeta"))
            .await
            .unwrap();
        storage
            .update_where_asked(QuestionId(3), Some("Alpha"))
            .await
            .unwrap();

        let asked: Vec<Option<String>> = storage
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.where_asked)
            .collect();
        assert_eq!(
            asked,
            vec![None, Some("Alpha".to_string()), Some("Zeta".to_string())]
        );
    }

    #[tokio::test]
    async fn test_list_orders_mixed_case_bytewise() {
        let storage = seeded().await;
        storage
            .update_where_asked(QuestionId(1), Some("alpha"))
            .await
            .unwrap();
        storage
            .update_where_asked(QuestionId(2), Some("Beta"))
            .await
            .unwrap();

        let asked: Vec<Option<String>> = storage
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.where_asked)
            .collect();
        assert_eq!(
            asked,
            vec![None, Some("Beta".to_string()), Some("alpha".to_string())]
        );
    }

    #[tokio::test]
    async fn test_closed_store_is_unavailable() {
        let storage = seeded().await;
        storage.close().await;

        assert!(storage.health_check().await.is_err());
        assert!(matches!(
            storage.list().await,
            Err(StorageError::Unavailable)
        ));
    }
}
