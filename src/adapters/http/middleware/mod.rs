//! HTTP middleware for axum.
//!
//! - `auth` - Authentication middleware and extractors
//! - `timeout` - Request deadline answered in the error envelope

pub mod auth;
pub mod timeout;

pub use auth::{auth_middleware, AuthRejection, AuthState, RequireAuth};
pub use timeout::timeout_middleware;
