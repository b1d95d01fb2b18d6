//! Booking request validation.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. required fields present
//! 2. `people_count` within `MIN_PEOPLE..=MAX_PEOPLE`
//! 3. `booking_date` is a calendar date
//! 4. the cafe exists (store lookup, done by the caller)
//! 5. `people_count` fits the cafe's capacity
//!
//! Steps 1-3 are [`BookingRequest::validate`]; step 5 is [`check_capacity`].

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CafeId, DomainError, ErrorCode};

/// Smallest party a booking may carry.
pub const MIN_PEOPLE: i64 = 1;

/// Largest party a booking may carry, regardless of cafe capacity.
pub const MAX_PEOPLE: i64 = 50;

/// A booking as proposed by a customer, before any checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub cafe_id: Option<String>,
    pub booking_date: Option<String>,
    pub booking_time: Option<String>,
    pub people_count: Option<i64>,
    pub special_requests: Option<String>,
}

/// A request that passed the field-level checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBookingRequest {
    cafe_ref: String,
    booking_date: NaiveDate,
    booking_time: String,
    people_count: i32,
    special_requests: Option<String>,
}

impl BookingRequest {
    /// Runs the field-level checks.
    ///
    /// # Errors
    ///
    /// - `EmptyField` "Missing required fields"
    /// - `OutOfRange` "People count must be 1-50"
    /// - `InvalidFormat` "Invalid booking date"
    pub fn validate(self) -> Result<ValidBookingRequest, DomainError> {
        let missing: Vec<&str> = [
            ("cafe_id", is_blank(&self.cafe_id)),
            ("booking_date", is_blank(&self.booking_date)),
            ("booking_time", is_blank(&self.booking_time)),
            ("people_count", self.people_count.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        let (Some(cafe_ref), Some(date), Some(time), Some(people)) = (
            self.cafe_id,
            self.booking_date,
            self.booking_time,
            self.people_count,
        ) else {
            return Err(missing_fields(&missing));
        };
        if !missing.is_empty() {
            return Err(missing_fields(&missing));
        }

        if !(MIN_PEOPLE..=MAX_PEOPLE).contains(&people) {
            return Err(
                DomainError::new(ErrorCode::OutOfRange, "People count must be 1-50")
                    .with_detail("field", "people_count")
                    .with_detail("actual", people.to_string()),
            );
        }

        let booking_date = parse_booking_date(date.trim()).ok_or_else(|| {
            DomainError::new(ErrorCode::InvalidFormat, "Invalid booking date")
                .with_detail("field", "booking_date")
        })?;

        Ok(ValidBookingRequest {
            cafe_ref: cafe_ref.trim().to_string(),
            booking_date,
            booking_time: time.trim().to_string(),
            people_count: people as i32,
            special_requests: self
                .special_requests
                .filter(|s| !s.trim().is_empty()),
        })
    }
}

impl ValidBookingRequest {
    /// The referenced cafe, or `None` when the reference cannot name any cafe.
    pub fn cafe_id(&self) -> Option<CafeId> {
        self.cafe_ref.parse().ok()
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

    pub(crate) fn into_parts(self) -> (NaiveDate, String, i32, Option<String>) {
        (
            self.booking_date,
            self.booking_time,
            self.people_count,
            self.special_requests,
        )
    }
}

/// Rejects a party larger than the cafe's capacity.
///
/// # Errors
///
/// - `OutOfRange` "Exceeds cafe capacity"
pub fn check_capacity(people_count: i32, capacity: i32) -> Result<(), DomainError> {
    if people_count > capacity {
        return Err(
            DomainError::new(ErrorCode::OutOfRange, "Exceeds cafe capacity")
                .with_detail("field", "people_count")
                .with_detail("capacity", capacity.to_string()),
        );
    }
    Ok(())
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn missing_fields(fields: &[&str]) -> DomainError {
    DomainError::new(ErrorCode::EmptyField, "Missing required fields")
        .with_detail("fields", fields.join(","))
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (date part kept).
fn parse_booking_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
