//! Booking reader port (read side).
//!
//! Joined listings for the three audiences. Every listing is ordered by
//! `booking_date` descending, then `created_at` descending.

use async_trait::async_trait;

use crate::domain::booking::{CustomerBooking, StaffBooking};
use crate::domain::foundation::{DomainError, UserId};

/// Reader port for booking listings.
#[async_trait]
pub trait BookingReader: Send + Sync {
    /// Bookings made by `customer_id`.
    async fn list_for_customer(
        &self,
        customer_id: &UserId,
    ) -> Result<Vec<CustomerBooking>, DomainError>;

    /// Bookings at any cafe owned by `owner_id`.
    async fn list_for_owner(&self, owner_id: &UserId) -> Result<Vec<StaffBooking>, DomainError>;

    /// Every booking.
    async fn list_all(&self) -> Result<Vec<StaffBooking>, DomainError>;
}
