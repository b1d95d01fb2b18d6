//! Axum router configuration for cafe endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_cafe, delete_cafe, get_cafe, list_cafes, my_cafes, update_cafe};
use crate::adapters::http::state::AppState;

/// Create the cafe API router, mounted at `/api/cafes`.
///
/// Reads are public; writes and `/my` require a token.
pub fn cafe_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cafes).post(create_cafe))
        .route("/my", get(my_cafes))
        .route("/:id", get(get_cafe).put(update_cafe).delete(delete_cafe))
}
