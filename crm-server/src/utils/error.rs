//! Unified error handling
//!
//! Application-level error enum plus the `{code, message, data}`
//! response envelope used on failure (and by [`ok`] for handlers that
//! want an enveloped success).
//!
//! # Error codes
//!
//! | Code  | Meaning | HTTP |
//! |-------|---------|------|
//! | E0000 | Success | 200 |
//! | E0002 | Validation failed | 400 |
//! | E0003 | Not found | 404 |
//! | E0004 | Conflict (duplicate) | 409 |
//! | E0006 | Invalid request | 400 |
//! | E4001 | Order number allocation failed | 500 |
//! | E7001 | Generation failed | 502 |
//! | E9001 | Internal error | 500 |
//! | E9002 | Database error | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::ai::AiError;
use crate::db::repository::RepoError;
use crate::orders::OrderError;

/// Unified API response envelope
///
/// ```json
/// {
///   "code": "E0000",
///   "message": "Success",
///   "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// Error code (E0000 means success)
    pub code: String,
    /// Message
    pub message: String,
    /// Response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Result alias used by HTTP handlers and application logic
pub type AppResult<T> = Result<T, AppError>;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Client errors (4xx) ==========
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid request: {0}")]
    Invalid(String),

    // ========== Server errors (5xx) ==========
    #[error("Order number allocation failed: {0}")]
    Allocation(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.as_str()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "E0004", msg.as_str()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.as_str()),
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, "E0006", msg.as_str()),

            AppError::Allocation(msg) => {
                error!(target: "orders", error = %msg, "Order number allocation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E4001",
                    "Order number allocation failed",
                )
            }

            // Opaque by design: transport detail was already logged at
            // the adapter boundary
            AppError::Generation(msg) => (StatusCode::BAD_GATEWAY, "E7001", msg.as_str()),

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9002", "Database error")
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error",
                )
            }
        };

        let body = Json(AppResponse::<()> {
            code: code.to_string(),
            message: message.to_string(),
            data: None,
        });

        (status, body).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(format!("{} not found", resource.into()))
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

// ========== Domain error conversions ==========

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Validation(msg) => AppError::Validation(msg),
            OrderError::Allocation(msg) => AppError::Allocation(msg),
            OrderError::Repo(repo) => repo.into(),
        }
    }
}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::Generation(err.to_string())
    }
}

// ========== Helper functions ==========

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<AppResponse<T>> {
    Json(AppResponse {
        code: "E0000".to_string(),
        message: "Success".to_string(),
        data: Some(data),
    })
}
