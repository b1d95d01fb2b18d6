//! BookingStatus enum for tracking the lifecycle of a booking.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Lowercase storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl StateMachine for BookingStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        use BookingStatus::*;
        match self {
            Pending => vec![Confirmed, Cancelled],
            Confirmed => vec![Cancelled],
            Cancelled => vec![],
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pending() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    }

    #[test]
    fn pending_moves_to_confirmed_or_cancelled() {
        assert!(BookingStatus::Pending.can_transition_to(&BookingStatus::Confirmed));
        assert!(BookingStatus::Pending.can_transition_to(&BookingStatus::Cancelled));
    }

    #[test]
    fn confirmed_moves_only_to_cancelled() {
        assert!(BookingStatus::Confirmed.can_transition_to(&BookingStatus::Cancelled));
        assert!(!BookingStatus::Confirmed.can_transition_to(&BookingStatus::Confirmed));
        assert!(!BookingStatus::Confirmed.can_transition_to(&BookingStatus::Pending));
    }

    #[test]
    fn cancelled_is_terminal() {
        assert!(BookingStatus::Cancelled.is_terminal());
        for target in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        ] {
            assert!(!BookingStatus::Cancelled.can_transition_to(&target));
        }
    }

    #[test]
    fn nothing_returns_to_pending() {
        for from in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        ] {
            assert!(!from.can_transition_to(&BookingStatus::Pending));
        }
    }

    #[test]
    fn parses_known_statuses_only() {
        assert_eq!("confirmed".parse::<BookingStatus>().unwrap(), BookingStatus::Confirmed);
        assert!("completed".parse::<BookingStatus>().is_err());
        assert!("".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn display_matches_storage_form() {
        assert_eq!(BookingStatus::Cancelled.to_string(), "cancelled");
    }
}
