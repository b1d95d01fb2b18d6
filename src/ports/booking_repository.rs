//! Booking repository port (write side).
//!
//! Bookings are inserted once and afterwards only change status. The status
//! update is a single-row compare-and-set so that two concurrent transitions
//! on the same booking cannot both succeed.

use async_trait::async_trait;

use crate::domain::booking::{Booking, BookingDetail, BookingStatus};
use crate::domain::foundation::{BookingId, CafeId, DomainError};

/// Repository port for Booking aggregate persistence.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Save a new booking.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, booking: &Booking) -> Result<(), DomainError>;

    /// Find a booking together with the owner of its cafe.
    async fn find_detail(&self, id: &BookingId) -> Result<Option<BookingDetail>, DomainError>;

    /// Set `status = next` only if the stored status is still `expected`.
    ///
    /// Returns `false` when the row was not updated (status moved on, or
    /// the booking vanished).
    async fn update_status(
        &self,
        id: &BookingId,
        expected: BookingStatus,
        next: BookingStatus,
    ) -> Result<bool, DomainError>;

    /// Whether any booking references the cafe.
    async fn exists_for_cafe(&self, cafe_id: &CafeId) -> Result<bool, DomainError>;
}
