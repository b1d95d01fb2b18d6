//! CreateCafeHandler - Command handler for opening a cafe.

use std::sync::Arc;

use tracing::info;

use crate::application::access::enforce;
use crate::domain::cafe::{Cafe, CafeDetails};
use crate::domain::foundation::{CafeId, DomainError, Identity, Operation, Resource};
use crate::ports::CafeRepository;

/// Command to create a cafe.
#[derive(Debug, Clone)]
pub struct CreateCafeCommand {
    pub details: CafeDetails,
}

/// Handler for creating cafes.
pub struct CreateCafeHandler {
    cafes: Arc<dyn CafeRepository>,
}

impl CreateCafeHandler {
    pub fn new(cafes: Arc<dyn CafeRepository>) -> Self {
        Self { cafes }
    }

    pub async fn handle(
        &self,
        identity: &Identity,
        cmd: CreateCafeCommand,
    ) -> Result<Cafe, DomainError> {
        // 1. Authorize - owners only
        enforce(Operation::CreateCafe, identity, &Resource::none())?;

        // 2. Build and validate
        let cafe = Cafe::new(CafeId::new(), *identity.id(), cmd.details)?;

        // 3. Persist
        self.cafes.save(&cafe).await?;

        info!(cafe_id = %cafe.id(), owner_id = %identity.id(), "Cafe created");
        Ok(cafe)
    }
}
