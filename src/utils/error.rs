//! Unified error handling
//!
//! [`AppError`] is the single error type handlers return. Its
//! `IntoResponse` impl is the one place the error body is rendered:
//!
//! ```json
//! {"success": false, "error": 404, "message": "resource not found"}
//! ```
//!
//! Authorization failures keep the (status, code, description) triple from
//! [`AuthError`]; the description becomes the message. 5xx details are
//! logged and masked.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::auth::AuthError;

/// Uniform error body for every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    /// HTTP status code, repeated in the body.
    pub error: u16,
    pub message: String,
}

/// Application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Guard-chain failure; status comes from the failure itself.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Requested resource does not exist (404)
    #[error("resource not found")]
    NotFound,

    /// Request body failed validation (400)
    #[error("bad request: {0}")]
    Validation(String),

    /// Request was well-formed but could not be processed (422)
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    /// Storage layer failure (500)
    #[error("storage error: {0}")]
    Storage(String),

    /// Anything else (500)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Handler result type alias
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Auth(e) => (e.status(), e.to_string()),

            AppError::NotFound => (StatusCode::NOT_FOUND, "resource not found".to_string()),

            AppError::Validation(msg) => {
                tracing::debug!(target: "api", detail = %msg, "Request validation failed");
                (StatusCode::BAD_REQUEST, "bad request".to_string())
            }

            AppError::Unprocessable(msg) => {
                tracing::debug!(target: "api", detail = %msg, "Request unprocessable");
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable".to_string())
            }

            AppError::Storage(msg) => {
                error!(target: "storage", error = %msg, "Storage error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an unexpected error occurred, request could not be processed".to_string(),
                )
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an unexpected error occurred, request could not be processed".to_string(),
                )
            }
        };

        let body = Json(ErrorBody {
            success: false,
            error: status.as_u16(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_keep_their_status() {
        let resp = AppError::from(AuthError::MissingHeader).into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = AppError::from(AuthError::InsufficientScope("post:drinks".into()))
            .into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = AppError::from(AuthError::MissingPermissionsClaim).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_resource_errors() {
        assert_eq!(
            AppError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("recipe missing".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unprocessable("delete failed".into())
                .into_response()
                .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
