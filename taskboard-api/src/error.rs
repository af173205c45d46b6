/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// Handlers return `Result<T, ApiError>` which converts to the appropriate
/// status code and JSON body.
///
/// # Status mapping
///
/// - `BadRequest`, `ValidationError` → 400 (missing fields, invalid enum
///   values, dangling references, and duplicate keys)
/// - `Unauthorized` → 401
/// - `NotFound` → 404
/// - `Internal` → 500 with a generic body; the detail is only logged
///
/// The 401/403 empty-body responses of the authentication middleware are
/// produced in `taskboard_shared::auth::middleware`, not here.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use taskboard_shared::auth::{jwt::JwtError, password::PasswordError};

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400) - duplicate keys and generic malformed input
    BadRequest(String),

    /// Unauthorized (401) - bad login credentials
    Unauthorized(String),

    /// Not found (404)
    NotFound(String),

    /// Validation failure (400) with field-level details
    ValidationError(Vec<ValidationErrorDetail>),

    /// Internal server error (500)
    Internal(String),
}

/// Validation error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    /// Field that failed validation
    pub field: String,

    /// Error message
    pub message: String,
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "bad_request", "not_found")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationErrorDetail>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::ValidationError(errors) => {
                write!(f, "Validation failed: {} errors", errors.len())
            }
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg, None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::ValidationError(errors) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                "Request validation failed".to_string(),
                Some(errors),
            ),
            ApiError::Internal(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// JSON extractor and response wrapper whose rejection maps to a 400
///
/// Axum's stock `Json` extractor rejects malformed bodies with 422; the
/// API contract requires 400 for malformed fields and out-of-enum values,
/// so handlers use this wrapper instead.
#[derive(Debug, axum::extract::FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                // Unique constraint violations surface as 400, matching the
                // register/create contracts
                if let Some(constraint) = db_err.constraint() {
                    if constraint.contains("username") {
                        return ApiError::BadRequest("Username already exists".to_string());
                    }
                    if constraint.contains("email") {
                        return ApiError::BadRequest("Email already exists".to_string());
                    }
                    return ApiError::BadRequest(format!("Constraint violation: {}", constraint));
                }

                ApiError::Internal(format!("Database error: {}", db_err))
            }
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// Convert request validation failures to field-level API errors
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details: Vec<ValidationErrorDetail> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| ValidationErrorDetail {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Validation failed".to_string()),
                })
            })
            .collect();

        ApiError::ValidationError(details)
    }
}

/// Convert password errors to API errors
impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::Internal(format!("Password operation failed: {}", err))
    }
}

/// Convert token creation errors to API errors
///
/// Handlers only mint tokens; validation failures are handled by the
/// authentication middleware and never reach this conversion.
impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        ApiError::Internal(format!("Token operation failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("Invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: Invalid input");

        let err = ApiError::NotFound("Task not found".to_string());
        assert_eq!(err.to_string(), "Not found: Task not found");
    }

    #[test]
    fn test_validation_error_display() {
        let errors = vec![
            ValidationErrorDetail {
                field: "title".to_string(),
                message: "Title is required".to_string(),
            },
            ValidationErrorDetail {
                field: "assigned_to".to_string(),
                message: "assigned_to is required".to_string(),
            },
        ];

        let err = ApiError::ValidationError(errors);
        assert_eq!(err.to_string(), "Validation failed: 2 errors");
    }

    #[tokio::test]
    async fn test_validation_error_maps_to_400() {
        let err = ApiError::ValidationError(vec![ValidationErrorDetail {
            field: "title".to_string(),
            message: "Title is required".to_string(),
        }]);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "validation_error");
        assert_eq!(json["details"][0]["field"], "title");
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let err = ApiError::Internal("connection pool exhausted".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "An internal error occurred");
    }

    #[test]
    fn test_validator_errors_become_field_details() {
        #[derive(Validate)]
        struct Probe {
            #[validate(required(message = "name is required"))]
            name: Option<String>,
        }

        let probe = Probe { name: None };
        let err: ApiError = probe.validate().unwrap_err().into();

        match err {
            ApiError::ValidationError(details) => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "name");
                assert_eq!(details[0].message, "name is required");
            }
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }
}
