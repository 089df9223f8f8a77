// src/store/memory.rs
// In-memory session store: the fake the lifecycle manager is tested against.
// Mirrors the SQLite store's newest-first listing so both backends behave
// alike under test.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::SessionStore;
use crate::error::Result;
use crate::interview::types::InterviewSession;

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, InterviewSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions. Test helper.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session: &InterviewSession) -> Result<()> {
        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<InterviewSession>> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<InterviewSession>> {
        let mut sessions: Vec<InterviewSession> =
            self.sessions.read().await.values().cloned().collect();
        sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(sessions)
    }
}
