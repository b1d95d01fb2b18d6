//! CreateBookingHandler - Command handler for placing a booking.

use std::sync::Arc;

use tracing::info;

use crate::application::access::enforce;
use crate::domain::booking::{Booking, BookingRequest};
use crate::domain::foundation::{BookingId, DomainError, ErrorCode, Identity, Operation, Resource};
use crate::ports::{BookingRepository, CafeRepository};

/// Handler for customers placing bookings.
///
/// No check is made against other bookings for the same cafe, date or
/// time; each booking is only measured against the cafe's capacity.
pub struct CreateBookingHandler {
    cafes: Arc<dyn CafeRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl CreateBookingHandler {
    pub fn new(cafes: Arc<dyn CafeRepository>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { cafes, bookings }
    }

    pub async fn handle(
        &self,
        identity: &Identity,
        request: BookingRequest,
    ) -> Result<Booking, DomainError> {
        // 1. Authorize - customers only
        enforce(Operation::CreateBooking, identity, &Resource::none())?;

        // 2. Field checks: required, party size, date
        let request = request.validate()?;

        // 3. Cafe must exist
        let cafe = match request.cafe_id() {
            Some(id) => self.cafes.find_by_id(&id).await?,
            None => None,
        }
        .ok_or_else(|| DomainError::new(ErrorCode::CafeNotFound, "Cafe not found"))?;

        // 4. Capacity check and build
        let booking = Booking::place(BookingId::new(), *identity.id(), &cafe, request)?;

        // 5. Persist
        self.bookings.save(&booking).await?;

        info!(
            booking_id = %booking.id(),
            cafe_id = %cafe.id(),
            customer_id = %identity.id(),
            people = booking.people_count(),
            "Booking created"
        );
        Ok(booking)
    }
}
