//! Access control gate.
//!
//! Every gated operation is listed once in [`Operation`], and every operation
//! maps to the set of [`Grant`]s that admit it. A grant pairs a role with an
//! optional ownership predicate evaluated against the target [`Resource`].
//! Handlers never branch on roles themselves; they ask [`authorize`].
//!
//! ```text
//! foundation/authorization.rs  <- Operation table + decision (this module)
//! application/access.rs        <- Enforcement with audit logging
//! ```

use std::fmt;

use super::{DomainError, ErrorCode, Identity, Role, UserId};

/// Operations guarded by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateCafe,
    UpdateCafe,
    DeleteCafe,
    ListOwnCafes,
    CreateBooking,
    ListOwnBookings,
    ListOwnerBookings,
    CancelOwnBooking,
    TransitionBookingStatus,
    ListAllBookings,
    ViewAdminStats,
}

impl Operation {
    /// All gated operations.
    pub const ALL: [Operation; 11] = [
        Operation::CreateCafe,
        Operation::UpdateCafe,
        Operation::DeleteCafe,
        Operation::ListOwnCafes,
        Operation::CreateBooking,
        Operation::ListOwnBookings,
        Operation::ListOwnerBookings,
        Operation::CancelOwnBooking,
        Operation::TransitionBookingStatus,
        Operation::ListAllBookings,
        Operation::ViewAdminStats,
    ];

    /// Grants that admit this operation. Any one matching grant allows it.
    pub fn grants(&self) -> &'static [Grant] {
        use Operation::*;
        match self {
            CreateCafe | ListOwnCafes | ListOwnerBookings => OWNER,
            UpdateCafe | DeleteCafe => CAFE_OWNER,
            CreateBooking | ListOwnBookings => CUSTOMER,
            CancelOwnBooking => BOOKING_CUSTOMER,
            TransitionBookingStatus => STAFF,
            ListAllBookings | ViewAdminStats => ADMIN,
        }
    }

    /// Roles that appear in any grant for this operation.
    pub fn admits_role(&self, role: Role) -> bool {
        self.grants().iter().any(|g| g.role == role)
    }

    fn as_str(&self) -> &'static str {
        use Operation::*;
        match self {
            CreateCafe => "create_cafe",
            UpdateCafe => "update_cafe",
            DeleteCafe => "delete_cafe",
            ListOwnCafes => "list_own_cafes",
            CreateBooking => "create_booking",
            ListOwnBookings => "list_own_bookings",
            ListOwnerBookings => "list_owner_bookings",
            CancelOwnBooking => "cancel_own_booking",
            TransitionBookingStatus => "transition_booking_status",
            ListAllBookings => "list_all_bookings",
            ViewAdminStats => "view_admin_stats",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relation between the caller and the target resource that a grant requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// No relation required.
    Any,
    /// Caller owns the cafe the resource belongs to.
    CafeOwner,
    /// Caller is the customer who made the booking.
    BookingCustomer,
}

/// One row of the grants table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grant {
    pub role: Role,
    pub ownership: Ownership,
}

impl Grant {
    const fn role(role: Role) -> Self {
        Self {
            role,
            ownership: Ownership::Any,
        }
    }

    const fn owning(role: Role, ownership: Ownership) -> Self {
        Self { role, ownership }
    }

    fn admits(&self, identity: &Identity, resource: &Resource) -> bool {
        if identity.role() != self.role {
            return false;
        }
        match self.ownership {
            Ownership::Any => true,
            Ownership::CafeOwner => resource.cafe_owner_id.as_ref() == Some(identity.id()),
            Ownership::BookingCustomer => resource.customer_id.as_ref() == Some(identity.id()),
        }
    }
}

const OWNER: &[Grant] = &[Grant::role(Role::Owner)];
const CUSTOMER: &[Grant] = &[Grant::role(Role::Customer)];
const ADMIN: &[Grant] = &[Grant::role(Role::Admin)];
const CAFE_OWNER: &[Grant] = &[Grant::owning(Role::Owner, Ownership::CafeOwner)];
const BOOKING_CUSTOMER: &[Grant] = &[Grant::owning(Role::Customer, Ownership::BookingCustomer)];
const STAFF: &[Grant] = &[
    Grant::role(Role::Admin),
    Grant::owning(Role::Owner, Ownership::CafeOwner),
];

/// The resource an operation targets, reduced to what ownership checks need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    kind: &'static str,
    id: Option<String>,
    cafe_owner_id: Option<UserId>,
    customer_id: Option<UserId>,
}

impl Resource {
    /// Collection-level operations with no specific target.
    pub fn none() -> Self {
        Self {
            kind: "collection",
            id: None,
            cafe_owner_id: None,
            customer_id: None,
        }
    }

    /// A cafe, identified by its ID and owner.
    pub fn cafe(id: impl fmt::Display, owner_id: UserId) -> Self {
        Self {
            kind: "Cafe",
            id: Some(id.to_string()),
            cafe_owner_id: Some(owner_id),
            customer_id: None,
        }
    }

    /// A booking, with the customer who made it and the owner of its cafe.
    pub fn booking(id: impl fmt::Display, customer_id: UserId, cafe_owner_id: UserId) -> Self {
        Self {
            kind: "Booking",
            id: Some(id.to_string()),
            cafe_owner_id: Some(cafe_owner_id),
            customer_id: Some(customer_id),
        }
    }

    /// Resource type name for audit output.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Resource ID for audit output, if targeted.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Outcome of a gate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny { reason: String },
}

impl AccessDecision {
    /// Returns true if access was granted.
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }

    /// Converts this decision to a `Result<(), DomainError>`.
    ///
    /// Returns `Ok(())` if allowed, `Err(Forbidden)` if denied.
    pub fn into_result(self) -> Result<(), DomainError> {
        match self {
            AccessDecision::Allow => Ok(()),
            AccessDecision::Deny { reason } => Err(DomainError::new(ErrorCode::Forbidden, reason)),
        }
    }
}

/// Decides whether `identity` may perform `operation` on `resource`.
pub fn authorize(operation: Operation, identity: &Identity, resource: &Resource) -> AccessDecision {
    let grants = operation.grants();
    if grants.iter().any(|g| g.admits(identity, resource)) {
        return AccessDecision::Allow;
    }

    let reason = if !operation.admits_role(identity.role()) {
        "Access denied".to_string()
    } else {
        match resource.kind {
            "Cafe" => "You do not own this cafe".to_string(),
            "Booking" => "You do not have access to this booking".to_string(),
            _ => "Access denied".to_string(),
        }
    };
    AccessDecision::Deny { reason }
}

/// Role-only pre-check, run before any store access.
///
/// Rejects callers whose role appears in no grant for `operation`, so an
/// unprivileged caller learns nothing about whether a resource exists.
pub fn check_role(operation: Operation, identity: &Identity) -> AccessDecision {
    if operation.admits_role(identity.role()) {
        AccessDecision::Allow
    } else {
        AccessDecision::Deny {
            reason: "Access denied".to_string(),
        }
    }
}
