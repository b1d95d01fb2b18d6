//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every handler takes the caller's `Identity` explicitly, passes the access
//! gate, then works against the ports.

pub mod access;
pub mod handlers;

pub use handlers::{
    // Account handlers
    AuthResult, LoginHandler, SeedAdminCommand, SeedAdminHandler, SignupHandler,
    // Cafe handlers
    CreateCafeCommand, CreateCafeHandler, DeleteCafeCommand, DeleteCafeHandler, GetCafeHandler,
    GetMyCafesHandler, ListCafesHandler, UpdateCafeCommand, UpdateCafeHandler,
    // Booking handlers
    CancelOwnBookingCommand, CancelOwnBookingHandler, CreateBookingHandler,
    GetAdminStatsHandler, ListAllBookingsHandler, ListCustomerBookingsHandler,
    ListOwnerBookingsHandler, TransitionBookingStatusCommand, TransitionBookingStatusHandler,
    TransitionResult,
};
