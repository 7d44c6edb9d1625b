//! Response envelope and error mapping
//!
//! Every endpoint answers with the same JSON object:
//! `{"success": bool, "message": "...", "data"?: ..., "total"?: n, "error"?: "..."}`.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::shared::panic_message;

/// Standard API response envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
    /// Payload: a record or a list of records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Number of records in `data`, for list responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    /// Fault detail, for internal errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            total: None,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            total: None,
            error: None,
        }
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// List envelope; `total` is the length of `items`.
    pub fn list(message: impl Into<String>, items: Vec<T>) -> Self {
        let total = items.len();
        Self::success(message, items).with_total(total)
    }
}

/// Failed request, rendered as a `success: false` envelope.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            detail: None,
        }
    }

    /// 500 with a per-operation message and the fault detail.
    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            detail: Some(detail.into()),
        }
    }

    /// Map a domain error; `context` becomes the message of internal errors.
    pub fn from_domain(err: DomainError, context: &str) -> Self {
        match err {
            DomainError::Validation(e) => Self::new(StatusCode::BAD_REQUEST, e.to_string()),
            DomainError::NotFound { entity, .. } => Self::new(
                StatusCode::NOT_FOUND,
                format!("{} not found", entity.to_lowercase()),
            ),
            DomainError::Internal(detail) => {
                error!("{}: {}", context, detail);
                Self::internal(context, detail)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = ApiResponse::<()>::failure(self.message);
        body.error = self.detail;
        (self.status, Json(body)).into_response()
    }
}

/// Last-resort fault boundary for `CatchPanicLayer`: a panic outside the
/// service call becomes a 500 envelope instead of a dropped connection.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic_message(&*err);

    error!(%detail, "Request handler panicked");
    ApiError::internal("internal server error", detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use serde_json::json;

    #[test]
    fn success_omits_empty_fields() {
        let body = serde_json::to_value(ApiResponse::success("ok", 7)).unwrap();
        assert_eq!(body, json!({"success": true, "message": "ok", "data": 7}));
    }

    #[test]
    fn list_sets_total() {
        let body = serde_json::to_value(ApiResponse::list("users", vec!["a", "b"])).unwrap();
        assert_eq!(body["total"], 2);
        assert_eq!(body["data"], json!(["a", "b"]));
    }

    #[test]
    fn domain_errors_map_to_status() {
        let bad = ApiError::from_domain(ValidationError::InvalidEmail.into(), "ctx");
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);
        assert_eq!(bad.message, "invalid email format");
        assert!(bad.detail.is_none());

        let missing = ApiError::from_domain(DomainError::user_not_found("x"), "ctx");
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert_eq!(missing.message, "user not found");

        let internal = ApiError::from_domain(DomainError::Internal("boom".into()), "failed to list users");
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.message, "failed to list users");
        assert_eq!(internal.detail.as_deref(), Some("boom"));
    }

    #[test]
    fn panic_payload_becomes_500() {
        let resp = handle_panic(Box::new("kaboom"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = handle_panic(Box::new(String::from("owned kaboom")));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = handle_panic(Box::new(42_u8));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
