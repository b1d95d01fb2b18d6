//! TransitionBookingStatusHandler - Command handler for staff status changes.

use std::sync::Arc;

use super::transition::{self, TransitionResult};
use crate::application::access::enforce_role;
use crate::domain::booking::{Actor, BookingStatus};
use crate::domain::foundation::{BookingId, DomainError, ErrorCode, Identity, Operation};
use crate::ports::BookingRepository;

/// Command to move a booking to a new status.
#[derive(Debug, Clone)]
pub struct TransitionBookingStatusCommand {
    pub booking_id: BookingId,
    /// Requested status as sent by the client.
    pub status: String,
}

/// Handler for the cafe's owner or an admin confirming or cancelling a booking.
pub struct TransitionBookingStatusHandler {
    bookings: Arc<dyn BookingRepository>,
}

impl TransitionBookingStatusHandler {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    pub async fn handle(
        &self,
        identity: &Identity,
        cmd: TransitionBookingStatusCommand,
    ) -> Result<TransitionResult, DomainError> {
        enforce_role(Operation::TransitionBookingStatus, identity)?;

        let target: BookingStatus = cmd.status.trim().parse().map_err(|_| {
            DomainError::new(ErrorCode::InvalidFormat, "Invalid status")
                .with_detail("field", "status")
        })?;

        transition::apply(
            self.bookings.as_ref(),
            identity,
            Operation::TransitionBookingStatus,
            Actor::Staff,
            cmd.booking_id,
            target,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::test_support::{seed_cafe, seed_user};
    use crate::application::handlers::CreateBookingHandler;
    use crate::domain::booking::{Booking, BookingRequest};
    use crate::domain::foundation::{ErrorCategory, Role};

    struct Fixture {
        store: Arc<InMemoryStore>,
        owner: Identity,
        booking: Booking,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(InMemoryStore::new());
        let owner = seed_user(&store, Role::Owner);
        let customer = seed_user(&store, Role::Customer);
        let cafe = seed_cafe(&store, &owner, 4).await;
        let booking = CreateBookingHandler::new(store.clone(), store.clone())
            .handle(
                &customer,
                BookingRequest {
                    cafe_id: Some(cafe.id().to_string()),
                    booking_date: Some("2025-11-20".to_string()),
                    booking_time: Some("08:30".to_string()),
                    people_count: Some(3),
                    special_requests: None,
                },
            )
            .await
            .unwrap();
        Fixture {
            store,
            owner,
            booking,
        }
    }

    fn cmd(booking: &Booking, status: &str) -> TransitionBookingStatusCommand {
        TransitionBookingStatusCommand {
            booking_id: *booking.id(),
            status: status.to_string(),
        }
    }

    #[tokio::test]
    async fn owner_confirms_then_admin_cancels() {
        let f = fixture().await;
        let handler = TransitionBookingStatusHandler::new(f.store.clone());
        let admin = seed_user(&f.store, Role::Admin);

        let confirmed = handler.handle(&f.owner, cmd(&f.booking, "confirmed")).await.unwrap();
        assert_eq!(confirmed.previous, BookingStatus::Pending);
        assert_eq!(confirmed.booking.status(), BookingStatus::Confirmed);

        let cancelled = handler.handle(&admin, cmd(&f.booking, "cancelled")).await.unwrap();
        assert_eq!(cancelled.booking.status(), BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn unknown_status_is_invalid_input_before_lookup() {
        let f = fixture().await;
        let err = TransitionBookingStatusHandler::new(f.store.clone())
            .handle(
                &f.owner,
                TransitionBookingStatusCommand {
                    booking_id: BookingId::new(),
                    status: "completed".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvalidInput);
        assert_eq!(err.message, "Invalid status");
    }

    #[tokio::test]
    async fn foreign_owner_is_forbidden_for_every_target() {
        let f = fixture().await;
        let rival = seed_user(&f.store, Role::Owner);
        let handler = TransitionBookingStatusHandler::new(f.store.clone());

        for status in ["pending", "confirmed", "cancelled"] {
            let err = handler.handle(&rival, cmd(&f.booking, status)).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::Forbidden, "target {}", status);
        }
    }

    #[tokio::test]
    async fn customers_are_forbidden() {
        let f = fixture().await;
        let customer = seed_user(&f.store, Role::Customer);
        let err = TransitionBookingStatusHandler::new(f.store.clone())
            .handle(&customer, cmd(&f.booking, "confirmed"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn targeting_pending_is_an_invalid_transition() {
        let f = fixture().await;
        let err = TransitionBookingStatusHandler::new(f.store.clone())
            .handle(&f.owner, cmd(&f.booking, "pending"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[tokio::test]
    async fn cancelled_booking_rejects_everything() {
        let f = fixture().await;
        let handler = TransitionBookingStatusHandler::new(f.store.clone());
        handler.handle(&f.owner, cmd(&f.booking, "cancelled")).await.unwrap();

        for status in ["pending", "confirmed", "cancelled"] {
            let err = handler.handle(&f.owner, cmd(&f.booking, status)).await.unwrap_err();
            assert_eq!(err.category(), ErrorCategory::InvalidTransition);
        }
    }

    #[tokio::test]
    async fn missing_booking_is_not_found() {
        let f = fixture().await;
        let err = TransitionBookingStatusHandler::new(f.store.clone())
            .handle(
                &f.owner,
                TransitionBookingStatusCommand {
                    booking_id: BookingId::new(),
                    status: "confirmed".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingNotFound);
    }
}
