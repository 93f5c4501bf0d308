use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    /// Storage write failed after retries. Non-fatal for the respondent:
    /// answers stay in the client and the save can simply be retried.
    Unavailable(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Unavailable(msg) => {
                tracing::warn!(error = %msg, "storage unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "could not save right now; your answers are kept on this device, retry in a moment"
                        .to_string(),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<flock_storage::error::StorageError> for ApiError {
    fn from(err: flock_storage::error::StorageError) -> Self {
        use flock_storage::error::StorageError;
        match err {
            StorageError::NotFound { key } => {
                ApiError::NotFound(format!("object not found: {key}"))
            }
            // Writes already went through the retry budget by the time
            // they surface here.
            StorageError::PutObject(msg) => ApiError::Unavailable(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<flock_assessments::error::AssessmentError> for ApiError {
    fn from(err: flock_assessments::error::AssessmentError) -> Self {
        use flock_assessments::error::AssessmentError;
        match err {
            AssessmentError::UnknownAssessment(id) => {
                ApiError::NotFound(format!("assessment not found: {id}"))
            }
            AssessmentError::UnknownQuestion { .. }
            | AssessmentError::AnswerOutOfRange { .. }
            | AssessmentError::Incomplete { .. }
            | AssessmentError::AssessmentMismatch { .. }
            | AssessmentError::AlreadyComplete(_) => ApiError::BadRequest(err.to_string()),
            AssessmentError::MissingNarrative { .. } | AssessmentError::NoCategories(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<flock_auth::error::AuthError> for ApiError {
    fn from(err: flock_auth::error::AuthError) -> Self {
        ApiError::Unauthorized(err.to_string())
    }
}

impl From<flock_core::error::CoreError> for ApiError {
    fn from(err: flock_core::error::CoreError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
