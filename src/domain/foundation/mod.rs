//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the caller identity, the access
//! gate and error types that form the vocabulary of the booking domain.

mod auth;
mod authorization;
mod errors;
mod ids;
mod ownership;
mod role;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, Identity};
pub use authorization::{
    authorize, check_role, AccessDecision, Grant, Operation, Ownership, Resource,
};
pub use errors::{DomainError, ErrorCategory, ErrorCode, ValidationError};
pub use ids::{BookingId, CafeId, UserId};
pub use ownership::OwnedByUser;
pub use role::Role;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
