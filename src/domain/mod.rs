//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, roles, identity, access gate, errors)
//! - `account` - Users, signup and login inputs
//! - `cafe` - Cafe aggregate
//! - `booking` - Booking aggregate, validation and status lifecycle
//! - `stats` - Admin dashboard figures

pub mod account;
pub mod booking;
pub mod cafe;
pub mod foundation;
pub mod stats;
