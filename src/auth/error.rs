// Authorization failure types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// Authorization failure, in the envelope auth-gated routes answer with:
/// `{"success": false, "error": {"code", "description"}, "status_code"}`.
#[derive(Debug)]
pub enum AuthError {
    // 401 - no Authorization header at all
    HeaderMissing,

    // 401 - malformed header, undecodable token, or no usable signing key
    InvalidHeader(String),

    // 401 - token decoded but its claims are wrong for this API
    InvalidClaims(String),

    // 401 - signature valid, token past its expiry
    TokenExpired(String),

    // 403 - authenticated but lacking the required permission
    Unauthorized(String),
}

impl AuthError {
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::Unauthorized(_) => 403,
            _ => 401,
        }
    }

    /// Stable machine-readable code for client handling
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::HeaderMissing => "authorization_header_missing",
            AuthError::InvalidHeader(_) => "invalid_header",
            AuthError::InvalidClaims(_) => "invalid_claims",
            AuthError::TokenExpired(_) => "token_expired",
            AuthError::Unauthorized(_) => "unauthorized",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        match self {
            AuthError::HeaderMissing => "Authorization header is expected",
            AuthError::InvalidHeader(desc)
            | AuthError::InvalidClaims(desc)
            | AuthError::TokenExpired(desc)
            | AuthError::Unauthorized(desc) => desc,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "success": false,
            "error": {
                "code": self.code(),
                "description": self.description(),
            },
            "status_code": self.status_code(),
        })
    }
}

impl AuthError {
    pub fn invalid_header(description: impl Into<String>) -> Self {
        AuthError::InvalidHeader(description.into())
    }

    pub fn invalid_claims(description: impl Into<String>) -> Self {
        AuthError::InvalidClaims(description.into())
    }

    pub fn token_expired() -> Self {
        AuthError::TokenExpired("Token expired".to_string())
    }

    pub fn unauthorized(description: impl Into<String>) -> Self {
        AuthError::Unauthorized(description.into())
    }
}

// Standard error trait implementations
impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

impl std::error::Error for AuthError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::UNAUTHORIZED);
        (status, Json(self.to_json())).into_response()
    }
}
