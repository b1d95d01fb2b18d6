//! Booking lifecycle: who may move a booking between which statuses.
//!
//! `BookingStatus` carries the state graph. This module layers the actor on
//! top of it: staff (the cafe's owner or an admin) may walk every edge of the
//! graph, a customer may only withdraw a booking that is still pending.
//!
//! | From      | To        | Staff | Customer |
//! |-----------|-----------|-------|----------|
//! | pending   | confirmed | yes   | no       |
//! | pending   | cancelled | yes   | yes      |
//! | confirmed | cancelled | yes   | no       |
//! | cancelled | *         | no    | no       |

use super::BookingStatus;
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};

/// The party asking for a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// Owner of the booking's cafe, or an admin.
    Staff,
    /// The customer who made the booking.
    Customer,
}

/// Transition rules for bookings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingLifecycle;

impl BookingLifecycle {
    /// Returns true if `actor` may move a booking from `from` to `to`.
    pub fn permits(actor: Actor, from: BookingStatus, to: BookingStatus) -> bool {
        match actor {
            Actor::Staff => from.can_transition_to(&to),
            Actor::Customer => matches!(
                (from, to),
                (BookingStatus::Pending, BookingStatus::Cancelled)
            ),
        }
    }

    /// Validates a transition, returning the new status.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the table does not allow it
    pub fn transition(
        actor: Actor,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<BookingStatus, DomainError> {
        if Self::permits(actor, from, to) {
            return Ok(to);
        }

        let message = match (actor, from) {
            _ if from.is_terminal() => format!("Booking is already {}", from),
            (Actor::Customer, BookingStatus::Confirmed) => {
                "Cannot cancel confirmed booking".to_string()
            }
            _ => format!("Cannot change booking from {} to {}", from, to),
        };

        Err(DomainError::new(ErrorCode::InvalidStateTransition, message)
            .with_detail("from", from.as_str())
            .with_detail("to", to.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BookingStatus::*;

    const ALL: [BookingStatus; 3] = [Pending, Confirmed, Cancelled];

    #[test]
    fn staff_can_confirm_and_cancel_pending() {
        assert_eq!(BookingLifecycle::transition(Actor::Staff, Pending, Confirmed).unwrap(), Confirmed);
        assert_eq!(BookingLifecycle::transition(Actor::Staff, Pending, Cancelled).unwrap(), Cancelled);
    }

    #[test]
    fn staff_can_cancel_confirmed() {
        assert_eq!(BookingLifecycle::transition(Actor::Staff, Confirmed, Cancelled).unwrap(), Cancelled);
    }

    #[test]
    fn customer_can_cancel_pending_only() {
        assert!(BookingLifecycle::permits(Actor::Customer, Pending, Cancelled));
        assert!(!BookingLifecycle::permits(Actor::Customer, Pending, Confirmed));

        let err = BookingLifecycle::transition(Actor::Customer, Confirmed, Cancelled).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert_eq!(err.message, "Cannot cancel confirmed booking");
    }

    #[test]
    fn cancelled_rejects_every_actor_and_target() {
        for actor in [Actor::Staff, Actor::Customer] {
            for to in ALL {
                let err = BookingLifecycle::transition(actor, Cancelled, to).unwrap_err();
                assert_eq!(err.code, ErrorCode::InvalidStateTransition);
            }
        }
    }

    #[test]
    fn same_state_requests_are_rejected() {
        for status in ALL {
            assert!(!BookingLifecycle::permits(Actor::Staff, status, status));
        }
    }

    #[test]
    fn customer_rights_are_a_subset_of_staff_rights() {
        for from in ALL {
            for to in ALL {
                if BookingLifecycle::permits(Actor::Customer, from, to) {
                    assert!(BookingLifecycle::permits(Actor::Staff, from, to));
                }
            }
        }
    }
}
