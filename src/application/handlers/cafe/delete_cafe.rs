//! DeleteCafeHandler - Command handler for closing a cafe.

use std::sync::Arc;

use tracing::info;

use super::cafe_not_found;
use crate::application::access::{enforce, enforce_role};
use crate::domain::foundation::{
    CafeId, DomainError, ErrorCode, Identity, Operation, OwnedByUser, Resource,
};
use crate::ports::{BookingRepository, CafeRepository};

/// Command to delete a cafe.
#[derive(Debug, Clone)]
pub struct DeleteCafeCommand {
    pub cafe_id: CafeId,
}

/// Handler for deleting cafes.
///
/// Bookings are never deleted, so a cafe that has any cannot be deleted.
pub struct DeleteCafeHandler {
    cafes: Arc<dyn CafeRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl DeleteCafeHandler {
    pub fn new(cafes: Arc<dyn CafeRepository>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { cafes, bookings }
    }

    pub async fn handle(&self, identity: &Identity, cmd: DeleteCafeCommand) -> Result<(), DomainError> {
        enforce_role(Operation::DeleteCafe, identity)?;

        // 1. Load cafe
        let cafe = self
            .cafes
            .find_by_id(&cmd.cafe_id)
            .await?
            .ok_or_else(|| cafe_not_found(&cmd.cafe_id))?;

        // 2. Authorize - must own it
        enforce(
            Operation::DeleteCafe,
            identity,
            &Resource::cafe(cafe.id(), *cafe.owner_id()),
        )?;

        // 3. Refuse while bookings reference it
        if self.bookings.exists_for_cafe(cafe.id()).await? {
            return Err(DomainError::new(
                ErrorCode::CafeHasBookings,
                "Cafe has bookings and cannot be deleted",
            ));
        }

        // 4. Delete
        self.cafes.delete(cafe.id()).await?;

        info!(cafe_id = %cafe.id(), "Cafe deleted");
        Ok(())
    }
}
