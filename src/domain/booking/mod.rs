//! Booking domain module.
//!
//! Covers the booking entity, the checks a new booking must pass, and the
//! status lifecycle including which actor may trigger each transition.

mod aggregate;
mod lifecycle;
mod status;
mod validator;
mod views;

pub use aggregate::Booking;
pub use lifecycle::{Actor, BookingLifecycle};
pub use status::BookingStatus;
pub use validator::{
    check_capacity, BookingRequest, ValidBookingRequest, MAX_PEOPLE, MIN_PEOPLE,
};
pub use views::{BookingDetail, CustomerBooking, StaffBooking};
pub(crate) use views::listing_order;
