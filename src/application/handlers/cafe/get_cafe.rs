//! GetCafeHandler - Public query handler for one cafe.

use std::sync::Arc;

use super::cafe_not_found;
use crate::domain::cafe::Cafe;
use crate::domain::foundation::{CafeId, DomainError};
use crate::ports::CafeRepository;

/// Handler fetching a cafe by ID. No authentication.
pub struct GetCafeHandler {
    cafes: Arc<dyn CafeRepository>,
}

impl GetCafeHandler {
    pub fn new(cafes: Arc<dyn CafeRepository>) -> Self {
        Self { cafes }
    }

    pub async fn handle(&self, cafe_id: CafeId) -> Result<Cafe, DomainError> {
        self.cafes
            .find_by_id(&cafe_id)
            .await?
            .ok_or_else(|| cafe_not_found(&cafe_id))
    }
}
