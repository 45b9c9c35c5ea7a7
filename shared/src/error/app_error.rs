//! 应用错误与 JSON 错误体

use super::codes::{ErrorCategory, ErrorCode};
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error returned by every handler
///
/// Carries a stable [`ErrorCode`], a message for the operator and optional
/// structured details (ids, amounts, offending states).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<Map<String, Value>>,
}

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Body of every error response
///
/// ```json
/// { "code": 4003, "message": "Invalid order transition: pending -> paid", "details": { ... } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code,
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        if self.code.category() == ErrorCategory::System {
            tracing::error!(code = %self.code, message = %self.message, "System error");
        } else {
            tracing::debug!(code = %self.code, message = %self.message, "Request rejected");
        }
        (status, Json(ErrorBody::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message_comes_from_code() {
        let err = AppError::new(ErrorCode::OrderNotFound);
        assert_eq!(err.message, "Order not found");
        assert_eq!(err.to_string(), "Order not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_details_accumulate() {
        let err = AppError::with_message(ErrorCode::PaymentInsufficientAmount, "short")
            .with_detail("due", 84.48)
            .with_detail("tendered", 80.0);

        let details = err.details.as_ref().unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details["due"], 84.48);
        assert_eq!(err.http_status(), StatusCode::PAYMENT_REQUIRED);
    }

    #[test]
    fn test_body_serializes_code_as_number() {
        let err = AppError::validation("Order has no items").with_detail("field", "items");
        let json = serde_json::to_value(ErrorBody::from(&err)).unwrap();

        assert_eq!(json["code"], 2);
        assert_eq!(json["message"], "Order has no items");
        assert_eq!(json["details"]["field"], "items");
    }

    #[test]
    fn test_body_omits_empty_details() {
        let body = ErrorBody::from(&AppError::internal("boom"));
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"code":9001,"message":"boom"}"#);
    }

    #[test]
    fn test_into_response_uses_code_status() {
        let response = AppError::new(ErrorCode::OrderAlreadyPaid).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
