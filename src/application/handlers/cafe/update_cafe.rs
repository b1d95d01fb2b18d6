//! UpdateCafeHandler - Command handler for editing a cafe.

use std::sync::Arc;

use tracing::info;

use super::cafe_not_found;
use crate::application::access::{enforce, enforce_role};
use crate::domain::cafe::{Cafe, CafeDetails};
use crate::domain::foundation::{
    CafeId, DomainError, Identity, Operation, OwnedByUser, Resource,
};
use crate::ports::CafeRepository;

/// Command to replace a cafe's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateCafeCommand {
    pub cafe_id: CafeId,
    pub details: CafeDetails,
}

/// Handler for updating cafes.
pub struct UpdateCafeHandler {
    cafes: Arc<dyn CafeRepository>,
}

impl UpdateCafeHandler {
    pub fn new(cafes: Arc<dyn CafeRepository>) -> Self {
        Self { cafes }
    }

    pub async fn handle(
        &self,
        identity: &Identity,
        cmd: UpdateCafeCommand,
    ) -> Result<Cafe, DomainError> {
        enforce_role(Operation::UpdateCafe, identity)?;

        // 1. Load cafe
        let mut cafe = self
            .cafes
            .find_by_id(&cmd.cafe_id)
            .await?
            .ok_or_else(|| cafe_not_found(&cmd.cafe_id))?;

        // 2. Authorize - must own it
        enforce(
            Operation::UpdateCafe,
            identity,
            &Resource::cafe(cafe.id(), *cafe.owner_id()),
        )?;

        // 3. Apply and persist
        cafe.update(cmd.details)?;
        self.cafes.update(&cafe).await?;

        info!(cafe_id = %cafe.id(), "Cafe updated");
        Ok(cafe)
    }
}
