// src/store/sqlite.rs
// Production session store: one row per session, the full session as a JSON
// document in `doc`, with `job` and `created_at` lifted into columns for the
// (job, created_at DESC) index.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::debug;

use super::SessionStore;
use crate::error::Result;
use crate::interview::types::InterviewSession;

pub struct SqliteSessionStore {
    pool: SqlitePool,
}

impl SqliteSessionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database at `database_url`, creating the file on first
    /// boot, and return a store with its schema ready.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    /// Create the sessions table and its listing index if they don't exist.
    /// Call once at startup, before serving.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS interview_sessions (
                id TEXT PRIMARY KEY,
                job TEXT NOT NULL,
                created_at TEXT NOT NULL,
                doc TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_sessions_job_created
            ON interview_sessions (job, created_at DESC)
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn save(&self, session: &InterviewSession) -> Result<()> {
        let doc = serde_json::to_string(session)?;

        sqlx::query(
            r#"
            INSERT INTO interview_sessions (id, job, created_at, doc)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT(id) DO UPDATE SET
                job = excluded.job,
                created_at = excluded.created_at,
                doc = excluded.doc
            "#,
        )
        .bind(&session.id)
        .bind(&session.job)
        .bind(session.created_at)
        .bind(&doc)
        .execute(&self.pool)
        .await?;

        debug!(session_id = %session.id, "session document saved");
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<InterviewSession>> {
        let doc: Option<String> =
            sqlx::query_scalar("SELECT doc FROM interview_sessions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        match doc {
            Some(doc) => Ok(Some(serde_json::from_str(&doc)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<InterviewSession>> {
        // Newest first. The core makes no ordering promise; this is the
        // store's own order.
        let docs: Vec<String> =
            sqlx::query_scalar("SELECT doc FROM interview_sessions ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        docs.iter()
            .map(|doc| serde_json::from_str(doc).map_err(Into::into))
            .collect()
    }
}
