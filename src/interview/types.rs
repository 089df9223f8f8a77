// src/interview/types.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One generated interview question. Immutable once the session is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Question number within the session (1, 2, 3…)
    pub qno: u32,
    pub text: String,
}

/// One submitted answer. Append-only: never mutated after insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// `qno` of the question this answer maps to
    pub question_id: u32,
    pub content: String,
    /// Seconds spent answering (optional, reserved for voice flows)
    pub duration_sec: Option<u32>,
    /// Server-assigned at submission time, never taken from the caller
    pub created_at: DateTime<Utc>,
}

/// Structured score filled in after the session ends. Unused by current
/// flows; kept on the wire for the future scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// Logical coherence, 0-100
    pub logic: u8,
    /// Clarity of expression, 0-100
    pub clarity: u8,
    /// Keyword coverage, 0-100
    pub keyword: u8,
    pub summary: String,
}

/// One mock-interview attempt: a job, its fixed questions, and the answers
/// accumulated so far. Stored as a single document keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSession {
    pub id: String,
    pub job: String,
    pub questions: Vec<Question>,
    /// Always present; initialized empty at creation so appends never need
    /// a null-check. `default` keeps older documents without the array loadable.
    #[serde(default)]
    pub answers: Vec<Answer>,
    pub feedback: Option<Feedback>,
    pub created_at: DateTime<Utc>,
}

// Request types for API

/// Body of `POST /test/answer`. A caller-supplied `createdAt` is accepted
/// here but discarded by the manager, which stamps its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSubmission {
    pub question_id: u32,
    pub content: String,
    #[serde(default)]
    pub duration_sec: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
