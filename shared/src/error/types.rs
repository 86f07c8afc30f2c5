//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type of the booking services, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an invalid format error carrying the offending input
    pub fn invalid_format(msg: impl Into<String>, input: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, msg).with_detail("input", input.into())
    }
}

/// Unified API response structure
///
/// - `code`: Error code (0 for success)
/// - `message`: Human-readable message
/// - `data`: Response payload (on success)
/// - `details`: Additional error details (on failure)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code (0 for success, non-zero for errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Human-readable message
    pub message: String,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Additional error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse<()> {
    /// Create a success response without data
    pub fn ok() -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: None,
            details: None,
        }
    }

    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::<()>::error(&self);

        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = match self.code.map(ErrorCode::try_from) {
            None => StatusCode::OK,
            Some(Ok(code)) if code.is_success() => StatusCode::OK,
            Some(Ok(code)) => code.http_status(),
            Some(Err(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::ZoneNotFound);
        assert_eq!(err.code, ErrorCode::ZoneNotFound);
        assert_eq!(err.message, "Zone not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Reason must not be empty")
            .with_detail("field", "reason")
            .with_detail("zone_id", 7);

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "reason");
        assert_eq!(details.get("zone_id").unwrap(), 7);
    }

    #[test]
    fn test_invalid_format_keeps_input() {
        let err = AppError::invalid_format("Invalid datetime", "2025-13-01");
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(
            err.details.unwrap().get("input").unwrap(),
            "2025-13-01"
        );
    }

    #[test]
    fn test_app_error_http_status() {
        assert_eq!(
            AppError::new(ErrorCode::ZoneNotFound).http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::new(ErrorCode::MigrationFailed).http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::ZoneNotFound, "Zone 12 not found");
        assert_eq!(format!("{}", err), "Zone 12 not found");
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::new(ErrorCode::ZoneNotClosed).with_detail("id", 5);
        let response = ApiResponse::<()>::error(&err);

        assert_eq!(response.code, Some(1002));
        assert_eq!(response.message, "Zone is not closed");
        assert!(response.data.is_none());
        assert!(response.details.is_some());
    }

    #[test]
    fn test_api_response_serialize() {
        let ok = serde_json::to_string(&ApiResponse::<()>::ok()).unwrap();
        assert_eq!(ok, r#"{"code":0,"message":"OK"}"#);
    }

    #[test]
    fn test_api_response_status() {
        use axum::response::IntoResponse;

        assert_eq!(ApiResponse::<()>::ok().into_response().status(), StatusCode::OK);

        let err = AppError::new(ErrorCode::ZoneNotFound);
        let response = ApiResponse::<()>::error(&err).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let unknown = ApiResponse::<()> {
            code: Some(4242),
            ..ApiResponse::ok()
        };
        assert_eq!(
            unknown.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
