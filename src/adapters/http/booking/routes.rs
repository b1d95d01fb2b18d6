//! Axum router configuration for booking endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    admin_stats, all_bookings, cancel_booking, create_booking, my_bookings, owner_bookings,
    update_status,
};
use crate::adapters::http::state::AppState;

/// Create the booking API router, mounted at `/api/bookings`.
///
/// Every route requires a token; the role checks live in the handlers.
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/my", get(my_bookings))
        .route("/owner", get(owner_bookings))
        .route("/admin", get(all_bookings))
        .route("/stats", get(admin_stats))
        .route("/:id/status", put(update_status))
        .route("/:id", delete(cancel_booking))
}
