//! Booking aggregate entity.
//!
//! Bookings are never deleted. They are created `pending` and only ever move
//! along the edges allowed by [`BookingLifecycle`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{check_capacity, Actor, BookingLifecycle, BookingStatus, ValidBookingRequest};
use crate::domain::cafe::Cafe;
use crate::domain::foundation::{
    BookingId, CafeId, DomainError, OwnedByUser, Timestamp, UserId,
};

/// Booking aggregate.
///
/// # Invariants
///
/// - `1 <= people_count <= 50`, and `people_count` fit the cafe capacity at creation
/// - `status` starts at `Pending`
/// - `Cancelled` is terminal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    cafe_id: CafeId,
    user_id: UserId,
    booking_date: NaiveDate,
    booking_time: String,
    people_count: i32,
    special_requests: Option<String>,
    status: BookingStatus,
    created_at: Timestamp,
}

impl Booking {
    /// Places a new pending booking at `cafe` for `customer`.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the party exceeds the cafe's capacity
    pub fn place(
        id: BookingId,
        customer: UserId,
        cafe: &Cafe,
        request: ValidBookingRequest,
    ) -> Result<Self, DomainError> {
        check_capacity(request.people_count(), cafe.capacity())?;

        let (booking_date, booking_time, people_count, special_requests) = request.into_parts();
        Ok(Self {
            id,
            cafe_id: *cafe.id(),
            user_id: customer,
            booking_date,
            booking_time,
            people_count,
            special_requests,
            status: BookingStatus::Pending,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a booking from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: BookingId,
        cafe_id: CafeId,
        user_id: UserId,
        booking_date: NaiveDate,
        booking_time: String,
        people_count: i32,
        special_requests: Option<String>,
        status: BookingStatus,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            cafe_id,
            user_id,
            booking_date,
            booking_time,
            people_count,
            special_requests,
            status,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &BookingId {
        &self.id
    }

    pub fn cafe_id(&self) -> &CafeId {
        &self.cafe_id
    }

    /// The customer who made the booking.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn booking_date(&self) -> NaiveDate {
        self.booking_date
    }

    pub fn booking_time(&self) -> &str {
        &self.booking_time
    }

    pub fn people_count(&self) -> i32 {
        self.people_count
    }

    pub fn special_requests(&self) -> Option<&str> {
        self.special_requests.as_deref()
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves the booking to `target` on behalf of `actor`.
    ///
    /// Returns the previous status.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the lifecycle does not allow it
    pub fn transition(
        &mut self,
        actor: Actor,
        target: BookingStatus,
    ) -> Result<BookingStatus, DomainError> {
        let next = BookingLifecycle::transition(actor, self.status, target)?;
        Ok(std::mem::replace(&mut self.status, next))
    }
}

impl OwnedByUser for Booking {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }
}
