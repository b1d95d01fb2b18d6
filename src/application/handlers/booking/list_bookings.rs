//! Booking listing query handlers, one per audience.
//!
//! Each listing is scoped by the caller: customers see their own bookings,
//! owners see bookings at their cafes, admins see everything.

use std::sync::Arc;

use crate::application::access::enforce;
use crate::domain::booking::{CustomerBooking, StaffBooking};
use crate::domain::foundation::{DomainError, Identity, Operation, Resource};
use crate::ports::BookingReader;

/// Handler listing the caller's own bookings.
pub struct ListCustomerBookingsHandler {
    reader: Arc<dyn BookingReader>,
}

impl ListCustomerBookingsHandler {
    pub fn new(reader: Arc<dyn BookingReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, identity: &Identity) -> Result<Vec<CustomerBooking>, DomainError> {
        enforce(Operation::ListOwnBookings, identity, &Resource::none())?;
        self.reader.list_for_customer(identity.id()).await
    }
}

/// Handler listing bookings at the caller's cafes.
pub struct ListOwnerBookingsHandler {
    reader: Arc<dyn BookingReader>,
}

impl ListOwnerBookingsHandler {
    pub fn new(reader: Arc<dyn BookingReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, identity: &Identity) -> Result<Vec<StaffBooking>, DomainError> {
        enforce(Operation::ListOwnerBookings, identity, &Resource::none())?;
        self.reader.list_for_owner(identity.id()).await
    }
}

/// Handler listing every booking (admin).
pub struct ListAllBookingsHandler {
    reader: Arc<dyn BookingReader>,
}

impl ListAllBookingsHandler {
    pub fn new(reader: Arc<dyn BookingReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, identity: &Identity) -> Result<Vec<StaffBooking>, DomainError> {
        enforce(Operation::ListAllBookings, identity, &Resource::none())?;
        self.reader.list_all().await
    }
}
