// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::services::DirectoryError;

/// HTTP API error with appropriate status codes and client-facing bodies.
///
/// Every body is `{message, error?}`; the `error` field carries the upstream
/// service detail verbatim when one is available.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    InvalidJson(String),

    // 401 Unauthorized
    Unauthorized {
        message: String,
        detail: Option<String>,
    },

    // 403 Forbidden
    Forbidden(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error (downstream service failures)
    InternalServerError {
        message: String,
        detail: Option<String>,
    },
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::InvalidJson(_) => 400,
            ApiError::Unauthorized { .. } => 401,
            ApiError::Forbidden(_) => 403,
            ApiError::NotFound(_) => 404,
            ApiError::InternalServerError { .. } => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::InvalidJson(msg) => msg,
            ApiError::Unauthorized { message, .. } => message,
            ApiError::Forbidden(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::InternalServerError { message, .. } => message,
        }
    }

    /// Upstream error detail, when one was captured
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { detail, .. }
            | ApiError::InternalServerError { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        let mut body = json!({ "message": self.message() });
        if let Some(detail) = self.detail() {
            body["error"] = json!(detail);
        }
        body
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn invalid_json(message: impl Into<String>) -> Self {
        ApiError::InvalidJson(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            detail: None,
        }
    }

    pub fn unauthorized_with(message: impl Into<String>, detail: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            detail: Some(detail.into()),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError {
            message: message.into(),
            detail: None,
        }
    }

    pub fn internal_server_error_with(
        message: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        ApiError::InternalServerError {
            message: message.into(),
            detail: Some(detail.into()),
        }
    }

    /// Map a directory failure to its HTTP error. `context` becomes the
    /// message for downstream-service failures, with the service detail
    /// passed through in `error`.
    pub fn from_directory(err: DirectoryError, context: &str) -> Self {
        match err {
            DirectoryError::UnknownEmail => ApiError::not_found("Empleado no encontrado"),
            DirectoryError::WrongPassword => ApiError::unauthorized("Contraseña incorrecta"),
            DirectoryError::Identity(e) => {
                ApiError::internal_server_error_with(context, e.to_string())
            }
            DirectoryError::Store(e) => ApiError::internal_server_error_with(context, e.to_string()),
            DirectoryError::Serialize(e) => {
                tracing::error!("record serialization error: {}", e);
                ApiError::internal_server_error(context)
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}
