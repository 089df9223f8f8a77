// src/store/mod.rs

//! Persistence trait for interview sessions (SQLite, in-memory fake).
//! All reads and writes go through this; the lifecycle manager never touches
//! the database directly.

mod memory;
mod sqlite;

pub use memory::InMemorySessionStore;
pub use sqlite::SqliteSessionStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::interview::types::InterviewSession;

/// Trait for any session backend. The store is a dumb persistence layer:
/// absence is data (`Ok(None)`), never an error, and all policy lives in the
/// lifecycle manager driving it.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a session document, replacing any existing document with the
    /// same id (create-or-save).
    async fn save(&self, session: &InterviewSession) -> Result<()>;

    /// Load one session by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<InterviewSession>>;

    /// Load every persisted session. Order is whatever the backend defines;
    /// callers must not rely on it.
    async fn find_all(&self) -> Result<Vec<InterviewSession>>;
}
