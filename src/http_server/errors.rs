//! # API Errors
//!
//! HTTP-facing error type. Store failures and boundary rejections both end up
//! here and render as `{"error": ..., "code": ...}` JSON.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::dish::{DishError, DishField, DishId, Violation};

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Boundary rejections (400)
    // ==================
    /// Body is not JSON or does not match the payload shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Path segment is not a valid dish id
    #[error("Invalid dish id: {0}")]
    InvalidPath(String),

    // ==================
    // Store failures
    // ==================
    /// Dish not found (404)
    #[error("Dish {0} not found")]
    NotFound(DishId),

    /// Semantic validation failed (422)
    #[error("Invalid {field}: {field} {violation}")]
    InvalidInput { field: DishField, violation: Violation },
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<DishError> for ApiError {
    fn from(err: DishError) -> Self {
        match err {
            DishError::NotFound(id) => ApiError::NotFound(id),
            DishError::InvalidInput { field, violation } => {
                ApiError::InvalidInput { field, violation }
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPath(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,

    /// Offending field, for semantic validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,

    /// Broken rule, for semantic validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<&'static str>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        let (field, violation) = match &err {
            ApiError::InvalidInput { field, violation } => {
                (Some(field.as_str()), Some(violation.code()))
            }
            _ => (None, None),
        };
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
            field,
            violation,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidBody("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidPath("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InvalidInput {
                field: DishField::Name,
                violation: Violation::Empty,
            }
            .status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_dish_error_mapping() {
        let err = ApiError::from(DishError::NotFound(3));
        assert!(matches!(err, ApiError::NotFound(3)));

        let err = ApiError::from(DishError::InvalidInput {
            field: DishField::Price,
            violation: Violation::NotPositive,
        });
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "Invalid price: price must be greater than 0");
    }

    #[test]
    fn test_error_body_carries_constraint() {
        let body = ErrorResponse::from(ApiError::InvalidInput {
            field: DishField::Price,
            violation: Violation::NotPositive,
        });
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], 422);
        assert_eq!(json["field"], "price");
        assert_eq!(json["violation"], "not_positive");
    }

    #[test]
    fn test_not_found_body_has_no_constraint() {
        let json = serde_json::to_value(ErrorResponse::from(ApiError::NotFound(8))).unwrap();
        assert_eq!(json["code"], 404);
        assert_eq!(json["error"], "Dish 8 not found");
        assert!(json.get("field").is_none());
        assert!(json.get("violation").is_none());
    }
}
