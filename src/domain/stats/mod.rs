//! Admin dashboard statistics.
//!
//! The store reports raw counts in a [`StatsSnapshot`]; revenue is derived
//! here so the unit price stays a configuration concern.

use serde::{Deserialize, Serialize};

/// Default estimated spend per confirmed guest.
pub const DEFAULT_UNIT_PRICE: i64 = 250;

/// Raw figures read from the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_bookings: i64,
    pub confirmed_bookings: i64,
    /// Sum of `people_count` over confirmed bookings.
    pub confirmed_people: i64,
    pub total_cafes: i64,
    /// Distinct owners with at least one cafe.
    pub active_owners: i64,
}

/// Figures shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_bookings: i64,
    pub total_confirmed: i64,
    pub estimated_revenue: f64,
    pub total_cafes: i64,
    pub active_owners: i64,
}

impl AdminStats {
    /// Derives the dashboard figures from a snapshot.
    pub fn from_snapshot(snapshot: StatsSnapshot, unit_price: i64) -> Self {
        Self {
            total_bookings: snapshot.total_bookings,
            total_confirmed: snapshot.confirmed_bookings,
            estimated_revenue: (snapshot.confirmed_people * unit_price) as f64,
            total_cafes: snapshot.total_cafes,
            active_owners: snapshot.active_owners,
        }
    }
}
