//! HTTP handlers for account endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::dto::{AuthResponse, IdentityResponse, MeResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::JsonBody;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::domain::account::{LoginRequest, SignupRequest};

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.signup_handler().handle(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new("User registered successfully", result)),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.login_handler().handle(request).await?;
    Ok(Json(AuthResponse::new("Login successful", result)))
}

/// GET /api/auth/me
pub async fn me(RequireAuth(identity): RequireAuth) -> impl IntoResponse {
    Json(MeResponse {
        success: true,
        message: "Protected route accessed".to_string(),
        user: IdentityResponse::from(&identity),
    })
}
