//! Cafe repository port.
//!
//! Cafes are read publicly and written only by their owner. Listings are
//! ordered by `created_at` descending.

use async_trait::async_trait;

use crate::domain::cafe::Cafe;
use crate::domain::foundation::{CafeId, DomainError, UserId};

/// Repository port for Cafe aggregate persistence.
#[async_trait]
pub trait CafeRepository: Send + Sync {
    /// Save a new cafe.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, cafe: &Cafe) -> Result<(), DomainError>;

    /// Update an existing cafe's editable fields.
    ///
    /// # Errors
    ///
    /// - `CafeNotFound` if the cafe doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, cafe: &Cafe) -> Result<(), DomainError>;

    /// Delete a cafe.
    ///
    /// # Errors
    ///
    /// - `CafeNotFound` if the cafe doesn't exist
    /// - `CafeHasBookings` if bookings still reference it
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &CafeId) -> Result<(), DomainError>;

    /// Find a cafe by its ID.
    async fn find_by_id(&self, id: &CafeId) -> Result<Option<Cafe>, DomainError>;

    /// All cafes, newest first.
    async fn list_all(&self) -> Result<Vec<Cafe>, DomainError>;

    /// Cafes owned by `owner_id`, newest first.
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Cafe>, DomainError>;
}
