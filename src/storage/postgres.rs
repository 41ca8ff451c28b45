//! `PostgreSQL` storage backend.
//!
//! Expects the `question` table from `sql/schema.sql`. The pool is created
//! once at startup; every operation acquires one connection, runs one
//! statement and hands the connection back when the guard drops.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::{Postgres, Row};
use tracing::{debug, info};

use crate::config::PostgresStorageConfig;
use crate::domain::{NewQuestion, Question, QuestionId};
use crate::error::{StorageError, StorageResult};
use crate::storage::traits::QuestionStorage;

const INSERT_QUESTION: &str =
    "INSERT INTO question (description_url, coding_round) VALUES ($1, $2)";
const UPDATE_WHERE_ASKED: &str = "UPDATE question SET where_asked = $1 WHERE qid = $2";
const DELETE_QUESTION: &str = "DELETE FROM question WHERE qid = $1";
// "C" collation compares bytes, the same order `listing_order` uses.
const LIST_QUESTIONS: &str = "SELECT qid, description_url, coding_round, where_asked \
     FROM question ORDER BY where_asked COLLATE \"C\" ASC NULLS FIRST, qid ASC";

/// `PostgreSQL`-backed question storage.
#[derive(Debug, Clone)]
pub struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    /// Connect a pool using the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial connections cannot be established.
    pub async fn connect(config: &PostgresStorageConfig) -> StorageResult<Self> {
        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .connect(&config.url)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        info!(
            min_connections = config.min_connections,
            max_connections = config.max_connections,
            "PostgreSQL pool connected"
        );

        Ok(Self { pool })
    }

    async fn acquire(&self) -> StorageResult<PoolConnection<Postgres>> {
        self.pool.acquire().await.map_err(|e| match e {
            sqlx::Error::PoolClosed => StorageError::Unavailable,
            other => StorageError::Connection(other.to_string()),
        })
    }
}

fn question_from_row(row: &PgRow) -> Result<Question, sqlx::Error> {
    Ok(Question {
        id: QuestionId(row.try_get("qid")?),
        description_url: row.try_get("description_url")?,
        coding_round: row.try_get("coding_round")?,
        where_asked: row.try_get("where_asked")?,
    })
}

#[async_trait]
impl QuestionStorage for PostgresStorage {
    async fn insert(&self, question: &NewQuestion) -> StorageResult<()> {
        let mut conn = self.acquire().await?;
        sqlx::query(INSERT_QUESTION)
            .bind(&question.description_url)
            .bind(&question.coding_round)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    async fn update_where_asked(
        &self,
        id: QuestionId,
        where_asked: Option<&str>,
    ) -> StorageResult<u64> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query(UPDATE_WHERE_ASKED)
            .bind(where_asked)
            .bind(id.0)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: QuestionId) -> StorageResult<u64> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query(DELETE_QUESTION)
            .bind(id.0)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list(&self) -> StorageResult<Vec<Question>> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query(LIST_QUESTIONS).fetch_all(&mut *conn).await?;
        debug!(rows = rows.len(), "Fetched questions");

        rows.iter()
            .map(question_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StorageError::Query(e.to_string()))
    }

    async fn health_check(&self) -> StorageResult<()> {
        let mut conn = self.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL pool closed");
    }

    fn backend_name(&self) -> &'static str {
        "postgresql"
    }
}
