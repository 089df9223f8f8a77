// src/interview/manager.rs

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use super::jobs::{JOB_CATALOG, build_questions};
use super::types::{Answer, AnswerSubmission, InterviewSession};
use crate::error::{InterviewError, Result};
use crate::store::SessionStore;

/// Owns every rule of the session lifecycle: creation, answer submission and
/// read access. The store underneath is a dumb persistence layer.
pub struct InterviewManager {
    store: Arc<dyn SessionStore>,
}

impl InterviewManager {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// The fixed job catalog, in declaration order.
    pub fn list_jobs(&self) -> Vec<String> {
        JOB_CATALOG.iter().map(|job| job.to_string()).collect()
    }

    /// Create a session for `job`: fresh id, three templated questions, empty
    /// answer list, creation timestamp. One durable write.
    ///
    /// `job` must be non-blank. Catalog membership is not checked; callers
    /// are expected to pick from `list_jobs`.
    pub async fn start_interview(&self, job: &str) -> Result<InterviewSession> {
        if job.trim().is_empty() {
            return Err(InterviewError::EmptyJob);
        }

        let session = InterviewSession {
            id: Uuid::new_v4().to_string(),
            job: job.to_string(),
            questions: build_questions(job),
            answers: Vec::new(),
            feedback: None,
            created_at: Utc::now(),
        };

        self.store.save(&session).await?;
        info!(session_id = %session.id, job, "interview session started");
        Ok(session)
    }

    /// Every persisted session. Order is store-defined; the core promises none.
    pub async fn all_sessions(&self) -> Result<Vec<InterviewSession>> {
        self.store.find_all().await
    }

    pub async fn session_by_id(&self, id: &str) -> Result<InterviewSession> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| InterviewError::SessionNotFound(id.to_string()))
    }

    /// Append one answer to a session and persist the updated document.
    /// The answer's `created_at` is stamped here; whatever the submission
    /// carried is discarded. Nothing is written when the session is unknown.
    ///
    /// Whole-document read-modify-write: concurrent submissions against the
    /// same session are not serialized, and the last save wins.
    pub async fn save_answer(
        &self,
        session_id: &str,
        submission: AnswerSubmission,
    ) -> Result<InterviewSession> {
        let mut session = self.session_by_id(session_id).await?;

        session.answers.push(Answer {
            question_id: submission.question_id,
            content: submission.content,
            duration_sec: submission.duration_sec,
            created_at: Utc::now(),
        });

        self.store.save(&session).await?;
        debug!(
            session_id = %session.id,
            answers = session.answers.len(),
            "answer appended"
        );
        Ok(session)
    }
}
