//! Unified error handling
//!
//! [`AppError`] covers every failure a handler can surface to a client.
//! Responses carry a plain `{"message": ..., "field"?: ...}` body; database
//! and internal errors are logged and masked before leaving the server.
//!
//! Card verification never returns an `AppError`: its failure modes degrade
//! to a structured negative [`shared::VerificationResponse`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or unknown admin session (401)
    #[error("Unauthorized")]
    Unauthorized,

    /// Admin login with a wrong access key (401)
    #[error("Invalid Access Key")]
    InvalidAccessKey,

    /// Malformed issuance input (400), optionally naming the offending field
    #[error("Validation failed: {message}")]
    Validation {
        field: Option<String>,
        message: String,
    },

    /// Reference identifier collision (409)
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Database error (500, masked)
    #[error("Database error: {0}")]
    Database(String),

    /// Internal error (500, masked)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            field: None,
            message: message.into(),
        }
    }

    pub fn validation_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::Duplicate(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    message: "Unauthorized".to_string(),
                    field: None,
                },
            ),
            AppError::InvalidAccessKey => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    message: "Invalid Access Key".to_string(),
                    field: None,
                },
            ),
            AppError::Validation { field, message } => {
                (StatusCode::BAD_REQUEST, ErrorBody { message, field })
            }
            AppError::Duplicate(message) => (StatusCode::CONFLICT, ErrorBody {
                message,
                field: None,
            }),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, ErrorBody {
                message,
                field: None,
            }),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody {
                    message: "Database error".to_string(),
                    field: None,
                })
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody {
                    message: "Internal server error".to_string(),
                    field: None,
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(msg) => AppError::Duplicate(msg),
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Application-level Result type
pub type AppResult<T> = Result<T, AppError>;
