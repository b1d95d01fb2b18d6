//! HTTP adapter for account endpoints.
//!
//! - `POST /api/auth/signup` - Register a customer or owner
//! - `POST /api/auth/login` - Exchange credentials for a token
//! - `GET /api/auth/me` - Echo the caller's identity

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::auth_routes;
