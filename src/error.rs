// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error carrying the envelope every non-auth failure wears:
/// `{"success": false, "error": <status>, "message": <text>}`.
#[derive(Debug)]
pub enum ApiError {
    // 404 Not Found
    NotFound(String),

    // 405 Method Not Allowed
    MethodNotAllowed(String),

    // 412 Precondition Failed (missing or empty required fields)
    PreconditionFailed(String),

    // 422 Unprocessable Entity
    Unprocessable(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => 404,
            ApiError::MethodNotAllowed(_) => 405,
            ApiError::PreconditionFailed(_) => 412,
            ApiError::Unprocessable(_) => 422,
            ApiError::InternalServerError(_) => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg) => msg,
            ApiError::MethodNotAllowed(msg) => msg,
            ApiError::PreconditionFailed(msg) => msg,
            ApiError::Unprocessable(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "success": false,
            "error": self.status_code(),
            "message": self.message(),
        })
    }
}

// Constructors carry the default message for each status; handlers that
// owe the client a more specific text swap it in with `with_message`.
impl ApiError {
    pub fn not_found() -> Self {
        ApiError::NotFound("resource not found".to_string())
    }

    pub fn method_not_allowed() -> Self {
        ApiError::MethodNotAllowed("Method not allowed".to_string())
    }

    pub fn precondition_failed() -> Self {
        ApiError::PreconditionFailed("precondition failed".to_string())
    }

    pub fn unprocessable() -> Self {
        ApiError::Unprocessable("unprocessed request".to_string())
    }

    pub fn internal_server_error() -> Self {
        ApiError::InternalServerError("internal server error".to_string())
    }

    pub fn with_message(self, message: impl Into<String>) -> Self {
        match self {
            ApiError::NotFound(_) => ApiError::NotFound(message.into()),
            ApiError::MethodNotAllowed(_) => ApiError::MethodNotAllowed(message.into()),
            ApiError::PreconditionFailed(_) => ApiError::PreconditionFailed(message.into()),
            ApiError::Unprocessable(_) => ApiError::Unprocessable(message.into()),
            ApiError::InternalServerError(_) => ApiError::InternalServerError(message.into()),
        }
    }
}

// Persistence failures re-signal as 422; the driver detail stays in the
// log and never reaches a client.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("database error: {}", err);
        ApiError::unprocessable()
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
