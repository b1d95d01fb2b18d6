//! CancelOwnBookingHandler - Command handler for customers withdrawing a booking.

use std::sync::Arc;

use super::transition::{self, TransitionResult};
use crate::application::access::enforce_role;
use crate::domain::booking::{Actor, BookingStatus};
use crate::domain::foundation::{BookingId, DomainError, Identity, Operation};
use crate::ports::BookingRepository;

/// Command to cancel one of the caller's own bookings.
#[derive(Debug, Clone)]
pub struct CancelOwnBookingCommand {
    pub booking_id: BookingId,
}

/// Handler for customers cancelling their own pending bookings.
///
/// A confirmed booking can only be cancelled by staff.
pub struct CancelOwnBookingHandler {
    bookings: Arc<dyn BookingRepository>,
}

impl CancelOwnBookingHandler {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    pub async fn handle(
        &self,
        identity: &Identity,
        cmd: CancelOwnBookingCommand,
    ) -> Result<TransitionResult, DomainError> {
        enforce_role(Operation::CancelOwnBooking, identity)?;

        transition::apply(
            self.bookings.as_ref(),
            identity,
            Operation::CancelOwnBooking,
            Actor::Customer,
            cmd.booking_id,
            BookingStatus::Cancelled,
        )
        .await
    }
}
