//! Shared status-change routine for staff and customer transitions.

use tracing::{debug, info};

use crate::application::access::enforce;
use crate::domain::booking::{Actor, Booking, BookingStatus};
use crate::domain::foundation::{BookingId, DomainError, ErrorCode, Identity, Operation};
use crate::ports::BookingRepository;

/// Attempts before a booking that keeps changing underneath us is reported.
const MAX_ATTEMPTS: usize = 3;

/// Outcome of a successful status change.
#[derive(Debug, Clone)]
pub struct TransitionResult {
    pub booking: Booking,
    pub previous: BookingStatus,
}

/// Loads, authorizes, validates and writes one status change.
///
/// If another writer changes the status between our read and our write,
/// the booking is read again and the whole check repeats against the new
/// status.
pub(super) async fn apply(
    bookings: &dyn BookingRepository,
    identity: &Identity,
    operation: Operation,
    actor: Actor,
    booking_id: BookingId,
    target: BookingStatus,
) -> Result<TransitionResult, DomainError> {
    for attempt in 1..=MAX_ATTEMPTS {
        // 1. Load booking with its cafe owner
        let detail = bookings
            .find_detail(&booking_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::BookingNotFound, "Booking not found")
                    .with_detail("booking_id", booking_id.to_string())
            })?;

        // 2. Authorize against the loaded booking
        enforce(operation, identity, &detail.resource())?;

        // 3. Consult the lifecycle
        let mut booking = detail.booking;
        let previous = booking.transition(actor, target)?;

        // 4. Compare-and-set
        if bookings.update_status(&booking_id, previous, target).await? {
            info!(
                booking_id = %booking_id,
                from = %previous,
                to = %target,
                by = %identity.id(),
                "Booking status changed"
            );
            return Ok(TransitionResult { booking, previous });
        }

        debug!(booking_id = %booking_id, attempt, "Booking status moved concurrently, re-reading");
    }

    Err(DomainError::new(
        ErrorCode::InternalError,
        "Booking status changed concurrently, try again",
    )
    .with_detail("booking_id", booking_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::test_support::{seed_cafe, seed_user};
    use crate::application::handlers::CreateBookingHandler;
    use crate::domain::booking::{BookingDetail, BookingRequest};
    use crate::domain::foundation::{CafeId, Role};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Lets a rival writer cancel the booking just before our first write.
    struct RacingRepository {
        inner: Arc<InMemoryStore>,
        raced: AtomicBool,
    }

    #[async_trait]
    impl BookingRepository for RacingRepository {
        async fn save(&self, booking: &Booking) -> Result<(), DomainError> {
            BookingRepository::save(self.inner.as_ref(), booking).await
        }

        async fn find_detail(&self, id: &BookingId) -> Result<Option<BookingDetail>, DomainError> {
            self.inner.find_detail(id).await
        }

        async fn update_status(
            &self,
            id: &BookingId,
            expected: BookingStatus,
            next: BookingStatus,
        ) -> Result<bool, DomainError> {
            if !self.raced.swap(true, Ordering::SeqCst) {
                self.inner
                    .update_status(id, expected, BookingStatus::Cancelled)
                    .await?;
            }
            self.inner.update_status(id, expected, next).await
        }

        async fn exists_for_cafe(&self, cafe_id: &CafeId) -> Result<bool, DomainError> {
            self.inner.exists_for_cafe(cafe_id).await
        }
    }

    #[tokio::test]
    async fn losing_writer_re_evaluates_against_the_new_status() {
        let store = Arc::new(InMemoryStore::new());
        let owner = seed_user(&store, Role::Owner);
        let customer = seed_user(&store, Role::Customer);
        let cafe = seed_cafe(&store, &owner, 4).await;
        let booking = CreateBookingHandler::new(store.clone(), store.clone())
            .handle(
                &customer,
                BookingRequest {
                    cafe_id: Some(cafe.id().to_string()),
                    booking_date: Some("2025-09-01".to_string()),
                    booking_time: Some("20:00".to_string()),
                    people_count: Some(2),
                    special_requests: None,
                },
            )
            .await
            .unwrap();

        let racing = RacingRepository {
            inner: store.clone(),
            raced: AtomicBool::new(false),
        };
        let err = apply(
            &racing,
            &owner,
            Operation::TransitionBookingStatus,
            Actor::Staff,
            *booking.id(),
            BookingStatus::Confirmed,
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        let detail = store.find_detail(booking.id()).await.unwrap().unwrap();
        assert_eq!(detail.booking.status(), BookingStatus::Cancelled);
    }
}
