//! Ownership trait for user-owned resources.
//!
//! Cafes are owned by the owner who created them; bookings are owned by the
//! customer who made them. Both expose that relation through `OwnedByUser`
//! so the access gate can compare it against the caller.

use super::UserId;

/// Trait for aggregates that have a single owning user.
///
/// # Example
///
/// ```ignore
/// impl OwnedByUser for Cafe {
///     fn owner_id(&self) -> &UserId {
///         &self.owner_id
///     }
/// }
///
/// if cafe.is_owner(identity.id()) { /* ... */ }
/// ```
pub trait OwnedByUser {
    /// Returns the ID of the user who owns this resource.
    fn owner_id(&self) -> &UserId;

    /// Checks if the given user is the owner.
    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }
}
