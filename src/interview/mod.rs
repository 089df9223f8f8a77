// src/interview/mod.rs
// Session lifecycle core: data model, job catalog, lifecycle manager.

pub mod jobs;
pub mod manager;
pub mod types;

pub use jobs::JOB_CATALOG;
pub use manager::InterviewManager;
pub use types::{Answer, AnswerSubmission, Feedback, InterviewSession, Question};
