use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::password::errors::PasswordError;

use crate::schemas::FieldError;

/// HTTP-facing outcome for the password routes.
#[derive(Debug)]
pub enum ApiError {
    /// Zero rows matched a read query.
    NotFound,
    /// Request payload failed field constraints.
    Validation(Vec<FieldError>),
    /// Storage or hashing fault; details are logged, the body stays opaque.
    Internal(String),
}

impl From<PasswordError> for ApiError {
    fn from(e: PasswordError) -> Self {
        match e {
            PasswordError::NotFound => ApiError::NotFound,
            PasswordError::Hash(msg) | PasswordError::Repository(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({"detail": "Password(s) not found"})),
            )
                .into_response(),
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({"detail": errors})),
            )
                .into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "password route failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"error": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}
