//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that verifies Bearer tokens and injects the caller's `Identity`
//! - `RequireAuth` - Extractor that requires authentication
//!
//! # Architecture
//!
//! The middleware uses the `CredentialVerifier` port, so swapping the token
//! format or using a mock in tests doesn't change it.
//!
//! ```text
//! Request → auth_middleware → injects Identity into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! A request without a token passes through untouched; public routes work
//! and protected routes are rejected by `RequireAuth`. A request with a bad
//! token is rejected here, whatever the route.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{AuthError, Identity};
use crate::ports::CredentialVerifier;

/// Auth middleware state - wraps the credential verifier.
pub type AuthState = Arc<dyn CredentialVerifier>;

/// Authentication middleware that verifies Bearer tokens.
///
/// Expects the token in the `Authorization` header with `Bearer` prefix:
/// ```text
/// Authorization: Bearer <token>
/// ```
pub async fn auth_middleware(
    State(verifier): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim);

    let Some(token) = token else {
        return next.run(request).await;
    };

    match verifier.verify(token).await {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(e) => {
            let (status, message) = match &e {
                AuthError::TokenExpired | AuthError::InvalidToken => {
                    (StatusCode::UNAUTHORIZED, "Invalid or expired token")
                }
                AuthError::ServiceUnavailable(msg) => {
                    tracing::error!("Auth service unavailable: {}", msg);
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "Authentication service unavailable",
                    )
                }
                AuthError::IssuanceFailed(_) => {
                    (StatusCode::UNAUTHORIZED, "Authentication failed")
                }
            };
            tracing::warn!(error = %e, "Rejected bearer token");

            (status, Json(ErrorResponse::new("AUTH_ERROR", message))).into_response()
        }
    }
}

/// Extractor that requires authentication.
///
/// If no `Identity` is in the request extensions (no token was sent),
/// returns 401 Unauthorized.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(RequireAuth(identity): RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}!", identity.email())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub Identity);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<Identity>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No authentication token was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthRejection::Unauthenticated => (StatusCode::UNAUTHORIZED, "No token provided"),
        };

        (status, Json(ErrorResponse::new("UNAUTHENTICATED", message))).into_response()
    }
}
