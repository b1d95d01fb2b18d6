//! Cafe aggregate entity.
//!
//! A cafe is owned by the owner who created it. Its capacity is read only
//! when a booking is placed; editing it never touches existing bookings.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CafeId, OwnedByUser, Timestamp, UserId, ValidationError};

/// Upper bound accepted for a cafe's capacity.
pub const MAX_CAPACITY: i64 = 10_000;

/// Maximum length for a cafe name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Editable cafe fields, as supplied on create and update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CafeDetails {
    pub name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub avg_price: Option<f64>,
    pub capacity: i64,
    pub theme: Option<String>,
}

impl CafeDetails {
    /// Validates the fields.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name is blank
    /// - `InvalidFormat` if name is too long or avg_price is negative
    /// - `OutOfRange` if capacity is not in `1..=MAX_CAPACITY`
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(ValidationError::invalid_format(
                "name",
                format!("must be at most {} characters", MAX_NAME_LENGTH),
            ));
        }
        if !(1..=MAX_CAPACITY).contains(&self.capacity) {
            return Err(ValidationError::out_of_range(
                "capacity",
                1,
                MAX_CAPACITY,
                self.capacity,
            ));
        }
        if let Some(price) = self.avg_price {
            if !price.is_finite() || price < 0.0 {
                return Err(ValidationError::invalid_format(
                    "avg_price",
                    "must be a non-negative number",
                ));
            }
        }
        Ok(())
    }
}

/// Cafe aggregate.
///
/// # Invariants
///
/// - `name` is non-empty
/// - `capacity` is at least 1
/// - `owner_id` never changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cafe {
    id: CafeId,
    owner_id: UserId,
    name: String,
    location: Option<String>,
    description: Option<String>,
    avg_price: Option<f64>,
    capacity: i32,
    theme: Option<String>,
    created_at: Timestamp,
}

impl Cafe {
    /// Creates a new cafe owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Any [`CafeDetails::validate`] failure.
    pub fn new(id: CafeId, owner_id: UserId, details: CafeDetails) -> Result<Self, ValidationError> {
        details.validate()?;
        Ok(Self {
            id,
            owner_id,
            name: details.name.trim().to_string(),
            location: details.location,
            description: details.description,
            avg_price: details.avg_price,
            capacity: details.capacity as i32,
            theme: details.theme,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a cafe from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CafeId,
        owner_id: UserId,
        name: String,
        location: Option<String>,
        description: Option<String>,
        avg_price: Option<f64>,
        capacity: i32,
        theme: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            name,
            location,
            description,
            avg_price,
            capacity,
            theme,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &CafeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn avg_price(&self) -> Option<f64> {
        self.avg_price
    }

    /// Largest party a single booking may bring.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces every editable field.
    ///
    /// # Errors
    ///
    /// Any [`CafeDetails::validate`] failure; the cafe is left unchanged.
    pub fn update(&mut self, details: CafeDetails) -> Result<(), ValidationError> {
        details.validate()?;
        self.name = details.name.trim().to_string();
        self.location = details.location;
        self.description = details.description;
        self.avg_price = details.avg_price;
        self.capacity = details.capacity as i32;
        self.theme = details.theme;
        Ok(())
    }
}

impl OwnedByUser for Cafe {
    fn owner_id(&self) -> &UserId {
        &self.owner_id
    }
}
