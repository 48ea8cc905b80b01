use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;

pub mod articles;
pub mod clients;
pub mod nutritionists;
pub mod subscriptions;

/// GET / - liveness check, the only ungated route
pub async fn root() -> Json<Value> {
    Json(json!({ "val": "Halos" }))
}

/// Unknown-path fallback
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

/// Known path, unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// A required create field: present and non-empty, or 412.
fn required(field: Option<String>) -> Result<String, ApiError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::precondition_failed().with_message("required fields expected")),
    }
}

/// The id a PATCH body must carry.
fn required_id(id: Option<i32>) -> Result<i32, ApiError> {
    id.ok_or_else(ApiError::precondition_failed)
}

/// A PATCH field: empty submissions keep the stored value.
fn keep_or(current: &str, submitted: Option<String>) -> String {
    match submitted {
        Some(value) if !value.is_empty() => value,
        _ => current.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_absent_and_empty() {
        assert!(required(None).is_err());
        assert!(required(Some(String::new())).is_err());

        let err = required(None).unwrap_err();
        assert_eq!(err.status_code(), 412);
        assert_eq!(err.message(), "required fields expected");
    }

    #[test]
    fn test_required_passes_values_through() {
        assert_eq!(required(Some("Amina".to_string())).unwrap(), "Amina");
    }

    #[test]
    fn test_required_id() {
        assert_eq!(required_id(Some(7)).unwrap(), 7);

        let err = required_id(None).unwrap_err();
        assert_eq!(err.status_code(), 412);
        assert_eq!(err.message(), "precondition failed");
    }

    #[test]
    fn test_keep_or_prefers_non_empty_submission() {
        assert_eq!(keep_or("old", Some("new".to_string())), "new");
        assert_eq!(keep_or("old", Some(String::new())), "old");
        assert_eq!(keep_or("old", None), "old");
    }
}
