// src/api/error.rs
// Centralized error handling for HTTP API responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use tracing::error;

use crate::error::InterviewError;

/// Standard API error response format
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
    pub error_code: Option<String>,
}

impl ApiError {
    /// Create a new bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::BAD_REQUEST,
            error_code: Some("BAD_REQUEST".to_string()),
        }
    }

    /// Create a new not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::NOT_FOUND,
            error_code: Some("NOT_FOUND".to_string()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response_json = json!({
            "error": true,
            "message": self.message,
            "status": self.status_code.as_u16()
        });

        if let Some(error_code) = self.error_code {
            response_json["error_code"] = json!(error_code);
        }

        (self.status_code, Json(response_json)).into_response()
    }
}

impl From<InterviewError> for ApiError {
    fn from(err: InterviewError) -> Self {
        let (status_code, error_code) = match &err {
            InterviewError::EmptyJob => (StatusCode::BAD_REQUEST, "EMPTY_JOB"),
            InterviewError::SessionNotFound(_) => (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND"),
            InterviewError::Persistence(_) | InterviewError::Json(_) => {
                error!("session store failure: {err}");
                (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE")
            }
        };

        Self {
            message: err.to_string(),
            status_code,
            error_code: Some(error_code.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let error = ApiError::not_found("Test error");
        assert_eq!(error.status_code, StatusCode::NOT_FOUND);
        assert_eq!(error.message, "Test error");
        assert_eq!(error.error_code.as_deref(), Some("NOT_FOUND"));
    }

    #[test]
    fn test_domain_error_mapping() {
        let bad: ApiError = InterviewError::EmptyJob.into();
        assert_eq!(bad.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(bad.error_code.as_deref(), Some("EMPTY_JOB"));

        let missing: ApiError = InterviewError::SessionNotFound("abc".into()).into();
        assert_eq!(missing.status_code, StatusCode::NOT_FOUND);
        assert_eq!(missing.error_code.as_deref(), Some("SESSION_NOT_FOUND"));
        assert!(missing.message.contains("abc"));

        let broken: ApiError = InterviewError::Persistence(sqlx::Error::PoolClosed).into();
        assert_eq!(broken.status_code, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(broken.error_code.as_deref(), Some("STORE_UNAVAILABLE"));
    }

    #[test]
    fn test_display_is_the_message() {
        let error = ApiError::bad_request("job must not be empty");
        assert_eq!(error.to_string(), "job must not be empty");
    }
}
