//! Booking read models.
//!
//! Listings join bookings with their cafe (and, for staff, the customer).
//! All listings are ordered by `booking_date` then `created_at`, newest first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Booking, BookingStatus};
use crate::domain::foundation::{BookingId, CafeId, Resource, Timestamp, UserId};

/// A booking as its customer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerBooking {
    pub id: BookingId,
    pub booking_date: NaiveDate,
    pub booking_time: String,
    pub people_count: i32,
    pub status: BookingStatus,
    pub special_requests: Option<String>,
    pub cafe_name: String,
    pub location: Option<String>,
    #[serde(skip)]
    pub created_at: Option<Timestamp>,
}

/// A booking as cafe owners and admins see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffBooking {
    pub id: BookingId,
    pub booking_date: NaiveDate,
    pub booking_time: String,
    pub people_count: i32,
    pub status: BookingStatus,
    pub special_requests: Option<String>,
    pub cafe_id: CafeId,
    pub cafe_name: String,
    pub user_id: UserId,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(skip)]
    pub created_at: Option<Timestamp>,
}

/// A booking together with the owner of its cafe.
///
/// Everything the gate needs to decide on a status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDetail {
    pub booking: Booking,
    pub cafe_owner_id: UserId,
}

impl BookingDetail {
    /// The booking as an access-gate resource.
    pub fn resource(&self) -> Resource {
        Resource::booking(
            self.booking.id(),
            *self.booking.user_id(),
            self.cafe_owner_id,
        )
    }
}

/// Newest booking date first, then newest created first.
pub(crate) fn listing_order(
    a: (NaiveDate, Option<&Timestamp>),
    b: (NaiveDate, Option<&Timestamp>),
) -> std::cmp::Ordering {
    b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{authorize, Identity, Operation, Role};

    #[test]
    fn listing_order_is_newest_date_then_newest_creation() {
        let early = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let late = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let t1 = Timestamp::now();
        let t2 = t1.plus_days(1);

        let mut rows = vec![(early, Some(&t2)), (late, Some(&t1)), (early, Some(&t1))];
        rows.sort_by(|a, b| listing_order(*a, *b));

        assert_eq!(rows, vec![(late, Some(&t1)), (early, Some(&t2)), (early, Some(&t1))]);
    }

    #[test]
    fn detail_resource_carries_both_relations() {
        let customer = UserId::new();
        let owner = UserId::new();
        let booking = Booking::reconstitute(
            BookingId::new(),
            CafeId::new(),
            customer,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            "10:00".to_string(),
            2,
            None,
            BookingStatus::Pending,
            Timestamp::now(),
        );
        let detail = BookingDetail {
            booking,
            cafe_owner_id: owner,
        };
        let resource = detail.resource();

        let as_owner = Identity::new(owner, Role::Owner, "o@example.com");
        let as_customer = Identity::new(customer, Role::Customer, "c@example.com");
        assert!(authorize(Operation::TransitionBookingStatus, &as_owner, &resource).is_allowed());
        assert!(authorize(Operation::CancelOwnBooking, &as_customer, &resource).is_allowed());
    }
}
