//! Booking handlers.
//!
//! Creation and the three listings are gated by role. Status changes go
//! through [`transition`] which loads the booking, passes the gate against
//! it, consults the lifecycle and writes with compare-and-set.

mod cancel_own_booking;
mod create_booking;
mod get_admin_stats;
mod list_bookings;
mod transition;
mod transition_booking_status;

pub use cancel_own_booking::{CancelOwnBookingCommand, CancelOwnBookingHandler};
pub use create_booking::CreateBookingHandler;
pub use get_admin_stats::GetAdminStatsHandler;
pub use list_bookings::{
    ListAllBookingsHandler, ListCustomerBookingsHandler, ListOwnerBookingsHandler,
};
pub use transition::TransitionResult;
pub use transition_booking_status::{
    TransitionBookingStatusCommand, TransitionBookingStatusHandler,
};
