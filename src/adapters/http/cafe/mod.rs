//! HTTP adapter for cafe endpoints.
//!
//! - `GET /api/cafes` - List every cafe (public)
//! - `GET /api/cafes/:id` - One cafe (public)
//! - `GET /api/cafes/my` - The calling owner's cafes
//! - `POST /api/cafes` - Create a cafe (owners)
//! - `PUT /api/cafes/:id` - Replace a cafe's fields (its owner)
//! - `DELETE /api/cafes/:id` - Delete a cafe without bookings (its owner)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::cafe_routes;
