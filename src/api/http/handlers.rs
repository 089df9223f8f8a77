// src/api/http/handlers.rs - Interview session endpoints

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::interview::{AnswerSubmission, InterviewSession};
use crate::state::AppState;

/// GET /ping - liveness probe.
pub async fn ping() -> &'static str {
    "🏓 interview server OK"
}

/// GET /test/jobs - the fixed job catalog, in display order.
pub async fn list_jobs(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.manager.list_jobs())
}

#[derive(Debug, Deserialize)]
pub struct StartParams {
    pub job: Option<String>,
}

/// POST /test/start?job=... - create a session with generated questions.
pub async fn start_interview(
    State(state): State<AppState>,
    Query(params): Query<StartParams>,
) -> Result<Json<InterviewSession>, ApiError> {
    // Missing `job` is treated the same as blank and rejected downstream.
    let job = params.job.unwrap_or_default();
    let session = state.manager.start_interview(&job).await?;
    Ok(Json(session))
}

/// GET /test/sessions - every stored session, newest first.
pub async fn get_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<InterviewSession>>, ApiError> {
    let sessions = state.manager.all_sessions().await?;
    Ok(Json(sessions))
}

/// GET /test/sessions/{id} - a single session by id.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InterviewSession>, ApiError> {
    let session = state.manager.session_by_id(&id).await?;
    Ok(Json(session))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerParams {
    pub session_id: Option<String>,
}

/// POST /test/answer?sessionId=... - append an answer, returning the
/// updated session.
pub async fn save_answer(
    State(state): State<AppState>,
    Query(params): Query<AnswerParams>,
    Json(submission): Json<AnswerSubmission>,
) -> Result<Json<InterviewSession>, ApiError> {
    let session_id = params
        .session_id
        .ok_or_else(|| ApiError::bad_request("sessionId query parameter is required"))?;
    let session = state.manager.save_answer(&session_id, submission).await?;
    Ok(Json(session))
}
