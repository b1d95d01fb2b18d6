//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod account;
pub mod booking;
pub mod cafe;

#[cfg(test)]
pub(crate) mod test_support;

pub use account::{
    AuthResult, LoginHandler, SeedAdminCommand, SeedAdminHandler, SignupHandler,
};
pub use booking::{
    CancelOwnBookingCommand, CancelOwnBookingHandler, CreateBookingHandler, GetAdminStatsHandler,
    ListAllBookingsHandler, ListCustomerBookingsHandler, ListOwnerBookingsHandler,
    TransitionBookingStatusCommand, TransitionBookingStatusHandler, TransitionResult,
};
pub use cafe::{
    CreateCafeCommand, CreateCafeHandler, DeleteCafeCommand, DeleteCafeHandler, GetCafeHandler,
    GetMyCafesHandler, ListCafesHandler, UpdateCafeCommand, UpdateCafeHandler,
};
