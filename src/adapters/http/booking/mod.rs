//! HTTP adapter for booking endpoints.
//!
//! - `POST /api/bookings` - Place a booking (customers)
//! - `GET /api/bookings/my` - The caller's bookings (customers)
//! - `GET /api/bookings/owner` - Bookings at the caller's cafes (owners)
//! - `GET /api/bookings/admin` - Every booking (admins)
//! - `GET /api/bookings/stats` - Dashboard figures (admins)
//! - `PUT /api/bookings/:id/status` - Confirm or cancel (cafe owner, admins)
//! - `DELETE /api/bookings/:id` - Cancel one's own pending booking (customers)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::booking_routes;
