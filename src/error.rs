//! Application error type and its HTTP mapping.
//!
//! Every fallible service and handler returns [`AppError`]. Each variant carries a
//! human-readable `message` plus structured `details` that end up in the JSON body:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short link not found", "details": { "code": "zzzzzz" } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::repositories::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serialized error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed client input (bad URL, bad short code format). Never retried.
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Unique-key conflict that could not be resolved internally.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Every generated code collided. Implies a bug or an exhausted code space.
    #[error("{message}")]
    CodeExhaustion { message: String, details: Value },

    /// Transient store failure; safe for the caller to retry.
    #[error("{message}")]
    StoreUnavailable { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn store_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            details,
        }
    }

    /// Short code that is not exactly the configured length of `[0-9a-z]`.
    pub fn invalid_code_format(code: &str) -> Self {
        Self::bad_request("Invalid short code format", json!({ "code": code }))
    }

    pub fn code_exhaustion(attempts: u32) -> Self {
        Self::CodeExhaustion {
            message: "Unable to generate unique short code".to_string(),
            details: json!({ "attempts": attempts }),
        }
    }

    fn parts(&self) -> (StatusCode, &'static str, &str, &Value) {
        match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message.as_str(),
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message.as_str(), details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message.as_str(), details)
            }
            AppError::CodeExhaustion { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "code_exhaustion",
                message.as_str(),
                details,
            ),
            AppError::StoreUnavailable { message, details } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "store_unavailable",
                message.as_str(),
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message.as_str(),
                details,
            ),
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code, message, details) = self.parts();
        ErrorInfo {
            code,
            message: message.to_string(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Duplicate(key) => AppError::conflict(
                "Unique constraint violation",
                json!({ "key": key.column() }),
            ),
            // Driver text stays in the logs, not in the response body.
            StoreError::Unavailable(reason) => {
                tracing::error!(%reason, "store unavailable");
                AppError::store_unavailable("Store unavailable", json!({}))
            }
            StoreError::Other(reason) => {
                tracing::error!(%reason, "store error");
                AppError::internal("Database error", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request("Validation failed", json!(errors))
    }
}
