//! Role enum for marketplace participants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Role assigned to a user at signup. Never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Books seats at cafes and manages their own bookings.
    #[default]
    Customer,
    /// Runs cafes and handles the bookings made against them.
    Owner,
    /// Sees and manages every cafe and booking.
    Admin,
}

impl Role {
    /// Resolves the role a client asked for at signup.
    ///
    /// Only `customer` and `owner` may be self-assigned. Anything else,
    /// `admin` included, falls back to `customer`.
    pub fn for_signup(requested: Option<&str>) -> Self {
        match requested.map(str::parse::<Role>) {
            Some(Ok(Role::Owner)) => Role::Owner,
            _ => Role::Customer,
        }
    }

    /// Lowercase storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Owner => "owner",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "owner" => Ok(Role::Owner),
            "admin" => Ok(Role::Admin),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}
