//! Cafe domain module.
//!
//! Venues run by owners. Customers book against a cafe's capacity.

mod aggregate;

pub use aggregate::{Cafe, CafeDetails, MAX_CAPACITY, MAX_NAME_LENGTH};
