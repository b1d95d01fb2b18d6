//! Axum router configuration for account endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{login, me, signup};
use crate::adapters::http::state::AppState;

/// Create the account API router, mounted at `/api/auth`.
///
/// # Routes
/// - `POST /signup` - public
/// - `POST /login` - public
/// - `GET /me` - requires a token
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/me", get(me))
}
