//! ListCafesHandler - Public query handler for all cafes.

use std::sync::Arc;

use crate::domain::cafe::Cafe;
use crate::domain::foundation::DomainError;
use crate::ports::CafeRepository;

/// Handler listing every cafe, newest first. No authentication.
pub struct ListCafesHandler {
    cafes: Arc<dyn CafeRepository>,
}

impl ListCafesHandler {
    pub fn new(cafes: Arc<dyn CafeRepository>) -> Self {
        Self { cafes }
    }

    pub async fn handle(&self) -> Result<Vec<Cafe>, DomainError> {
        self.cafes.list_all().await
    }
}
