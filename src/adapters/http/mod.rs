//! HTTP adapter - REST API over the application handlers.
//!
//! Each resource has its own `dto`, `handlers` and `routes`; [`app_router`]
//! nests them and adds the auth middleware and tower layers.

pub mod auth;
pub mod booking;
pub mod cafe;
pub mod error;
pub mod extract;
pub mod health;
pub mod middleware;
pub mod response;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use router::app_router;
pub use state::AppState;
