//! Error envelope shared by every endpoint.
//!
//! Every failure is reported as `{ "success": false, "message": ..., "code": ... }`
//! with the status code chosen by the error's category.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCategory, ErrorCode};

/// JSON body for failed requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    /// Human-readable error message.
    pub message: String,
    /// Error code for programmatic handling.
    pub code: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            code: code.into(),
            details: HashMap::new(),
        }
    }
}

/// HTTP status for each error category.
pub fn status_for(category: ErrorCategory) -> StatusCode {
    match category {
        ErrorCategory::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorCategory::Forbidden => StatusCode::FORBIDDEN,
        ErrorCategory::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorCategory::NotFound => StatusCode::NOT_FOUND,
        ErrorCategory::InvalidTransition => StatusCode::CONFLICT,
        ErrorCategory::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// A `DomainError` on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.category());

        // Store internals stay in the logs.
        let body = if err.code == ErrorCode::DatabaseError {
            tracing::error!(error = %err.message, "Request failed on store access");
            ErrorResponse::new(err.code.to_string(), "Service temporarily unavailable")
        } else {
            ErrorResponse {
                details: err.details,
                ..ErrorResponse::new(err.code.to_string(), err.message)
            }
        };

        (status, Json(body)).into_response()
    }
}
