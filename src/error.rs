//! Error types for the logic server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

/// Stable error codes exposed to the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ResourceNotFound,
    BusinessRuleViolation,
    InvalidInput,
    BusinessConstraint,
    ServiceUnavailable,
    InternalError,
    Unauthorized,
    Forbidden,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ResourceNotFound => "RESOURCE_NOT_FOUND",
            ErrorCode::BusinessRuleViolation => "BUSINESS_RULE_VIOLATION",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::BusinessConstraint => "BUSINESS_CONSTRAINT",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("gRPC communication error: {0}")]
    Grpc(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Authorization failed: {0}")]
    Authorization(String),
}

impl AppError {
    /// HTTP status, error code and the stable public message for this error
    pub fn classify(&self) -> (StatusCode, ErrorCode, &'static str) {
        match self {
            AppError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorCode::ResourceNotFound,
                "Resource not found",
            ),
            AppError::BusinessRule(_) => (
                StatusCode::CONFLICT,
                ErrorCode::BusinessRuleViolation,
                "Business rule violated",
            ),
            AppError::InvalidInput(_) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidInput,
                "Invalid input provided",
            ),
            AppError::Conflict(_) => (
                StatusCode::CONFLICT,
                ErrorCode::BusinessConstraint,
                "Business constraint violated",
            ),
            AppError::Grpc(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::ServiceUnavailable,
                "Service temporarily unavailable",
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError,
                "An unexpected error occurred",
            ),
            AppError::Authentication(_) => (
                StatusCode::UNAUTHORIZED,
                ErrorCode::Unauthorized,
                "Authentication required",
            ),
            AppError::Authorization(_) => (
                StatusCode::FORBIDDEN,
                ErrorCode::Forbidden,
                "Access denied",
            ),
        }
    }

    /// The specific reason, reported as `details`
    pub fn details(&self) -> &str {
        match self {
            AppError::NotFound(msg)
            | AppError::BusinessRule(msg)
            | AppError::InvalidInput(msg)
            | AppError::Conflict(msg)
            | AppError::Grpc(msg)
            | AppError::Internal(msg)
            | AppError::Authentication(msg)
            | AppError::Authorization(msg) => msg,
        }
    }
}

impl From<tonic::Status> for AppError {
    fn from(status: tonic::Status) -> Self {
        AppError::Grpc(format!("{:?}: {}", status.code(), status.message()))
    }
}

impl From<tonic::transport::Error> for AppError {
    fn from(err: tonic::transport::Error) -> Self {
        AppError::Grpc(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::InvalidInput(errors.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub error_code: String,
    pub timestamp: String,
    pub details: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        if status.is_server_error() {
            tracing::error!(error_code = code.as_str(), "{}", self);
        } else {
            tracing::warn!(error_code = code.as_str(), "{}", self);
        }

        let body = Json(ErrorResponse {
            message: message.to_string(),
            error_code: code.as_str().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            details: self.details().to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND, "RESOURCE_NOT_FOUND"),
            (AppError::BusinessRule("x".into()), StatusCode::CONFLICT, "BUSINESS_RULE_VIOLATION"),
            (AppError::InvalidInput("x".into()), StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT, "BUSINESS_CONSTRAINT"),
            (AppError::Grpc("x".into()), StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
            (AppError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            (AppError::Authentication("x".into()), StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            (AppError::Authorization("x".into()), StatusCode::FORBIDDEN, "FORBIDDEN"),
        ];

        for (err, status, code) in cases {
            let (s, c, _) = err.classify();
            assert_eq!(s, status);
            assert_eq!(c.as_str(), code);
        }
    }

    #[test]
    fn test_details_carry_specific_reason() {
        let err = AppError::NotFound("Book with ISBN 123 not found".to_string());
        assert_eq!(err.details(), "Book with ISBN 123 not found");
        assert_eq!(err.classify().2, "Resource not found");
    }

    #[test]
    fn test_grpc_status_maps_to_service_unavailable() {
        let err: AppError = tonic::Status::unavailable("connection refused").into();
        assert!(matches!(err, AppError::Grpc(_)));
        assert!(err.details().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_response_envelope() {
        let response = AppError::Conflict("Only the borrower can extend the loan".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Business constraint violated");
        assert_eq!(body["errorCode"], "BUSINESS_CONSTRAINT");
        assert_eq!(body["details"], "Only the borrower can extend the loan");
        assert!(body["timestamp"].is_string());
    }
}
