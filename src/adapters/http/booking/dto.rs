//! HTTP DTOs for booking endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::booking::{Booking, BookingStatus};
use crate::domain::stats::AdminStats;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `PUT /:id/status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusRequest {
    pub status: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct BookingCreatedResponse {
    pub success: bool,
    pub message: String,
    pub booking_id: String,
}

/// `{ "success": true, "bookings": [...] }` for any of the three views.
#[derive(Debug, Clone, Serialize)]
pub struct BookingListResponse<T> {
    pub success: bool,
    pub bookings: Vec<T>,
}

impl<T> BookingListResponse<T> {
    pub fn new(bookings: Vec<T>) -> Self {
        Self {
            success: true,
            bookings,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: String,
    pub cafe_id: String,
    pub user_id: String,
    pub booking_date: NaiveDate,
    pub booking_time: String,
    pub people_count: i32,
    pub special_requests: Option<String>,
    pub status: BookingStatus,
}

impl From<&Booking> for BookingResponse {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id().to_string(),
            cafe_id: booking.cafe_id().to_string(),
            user_id: booking.user_id().to_string(),
            booking_date: booking.booking_date(),
            booking_time: booking.booking_time().to_string(),
            people_count: booking.people_count(),
            special_requests: booking.special_requests().map(str::to_string),
            status: booking.status(),
        }
    }
}

/// Response for a status change.
#[derive(Debug, Clone, Serialize)]
pub struct BookingStatusResponse {
    pub success: bool,
    pub message: String,
    pub booking: BookingResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: AdminStats,
}
