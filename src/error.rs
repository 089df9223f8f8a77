// src/error.rs
// Standardized error types for the interview backend

use thiserror::Error;

/// Main error type for the interview library
#[derive(Error, Debug)]
pub enum InterviewError {
    #[error("no interview session with id: {0}")]
    SessionNotFound(String),

    #[error("job must not be empty")]
    EmptyJob,

    #[error("database error: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("session document error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Result using InterviewError
pub type Result<T> = std::result::Result<T, InterviewError>;

impl InterviewError {
    /// True for conditions the caller can recover from (bad input, unknown id),
    /// false for store-side faults.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            InterviewError::SessionNotFound(_) | InterviewError::EmptyJob
        )
    }
}
