//! GetMyCafesHandler - Query handler for an owner's cafes.

use std::sync::Arc;

use crate::application::access::enforce;
use crate::domain::cafe::Cafe;
use crate::domain::foundation::{DomainError, Identity, Operation, Resource};
use crate::ports::CafeRepository;

/// Handler listing the caller's own cafes, newest first.
pub struct GetMyCafesHandler {
    cafes: Arc<dyn CafeRepository>,
}

impl GetMyCafesHandler {
    pub fn new(cafes: Arc<dyn CafeRepository>) -> Self {
        Self { cafes }
    }

    pub async fn handle(&self, identity: &Identity) -> Result<Vec<Cafe>, DomainError> {
        enforce(Operation::ListOwnCafes, identity, &Resource::none())?;
        self.cafes.list_by_owner(identity.id()).await
    }
}
