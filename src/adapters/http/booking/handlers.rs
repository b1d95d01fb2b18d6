//! HTTP handlers for booking endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::dto::{
    BookingCreatedResponse, BookingListResponse, BookingResponse, BookingStatusResponse,
    StatsResponse, StatusRequest,
};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{path_id, JsonBody};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::response::MessageResponse;
use crate::adapters::http::state::AppState;
use crate::application::access::enforce_role;
use crate::application::{CancelOwnBookingCommand, TransitionBookingStatusCommand};
use crate::domain::booking::BookingRequest;
use crate::domain::foundation::{BookingId, DomainError, ErrorCode, Identity, Operation};

/// Role check first, so a caller the operation never admits sees 403 for
/// malformed and well-formed ids alike.
fn booking_id(identity: &Identity, operation: Operation, raw: &str) -> Result<BookingId, ApiError> {
    enforce_role(operation, identity)?;
    path_id(raw, || {
        DomainError::new(ErrorCode::BookingNotFound, "Booking not found")
    })
}

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    JsonBody(request): JsonBody<BookingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let booking = state
        .create_booking_handler()
        .handle(&identity, request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            success: true,
            message: "Booking created successfully".to_string(),
            booking_id: booking.id().to_string(),
        }),
    ))
}

/// GET /api/bookings/my
pub async fn my_bookings(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let bookings = state.customer_bookings_handler().handle(&identity).await?;
    Ok(Json(BookingListResponse::new(bookings)))
}

/// GET /api/bookings/owner
pub async fn owner_bookings(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let bookings = state.owner_bookings_handler().handle(&identity).await?;
    Ok(Json(BookingListResponse::new(bookings)))
}

/// GET /api/bookings/admin
pub async fn all_bookings(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let bookings = state.all_bookings_handler().handle(&identity).await?;
    Ok(Json(BookingListResponse::new(bookings)))
}

/// GET /api/bookings/stats
pub async fn admin_stats(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let stats = state.admin_stats_handler().handle(&identity).await?;
    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}

/// PUT /api/bookings/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<StatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = TransitionBookingStatusCommand {
        booking_id: booking_id(&identity, Operation::TransitionBookingStatus, &id)?,
        status: request.status.unwrap_or_default(),
    };
    let result = state
        .transition_status_handler()
        .handle(&identity, cmd)
        .await?;

    Ok(Json(BookingStatusResponse {
        success: true,
        message: format!("Booking {}", result.booking.status()),
        booking: BookingResponse::from(&result.booking),
    }))
}

/// DELETE /api/bookings/:id
pub async fn cancel_booking(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CancelOwnBookingCommand {
        booking_id: booking_id(&identity, Operation::CancelOwnBooking, &id)?,
    };
    state
        .cancel_own_booking_handler()
        .handle(&identity, cmd)
        .await?;

    Ok(Json(MessageResponse::new("Booking cancelled")))
}
