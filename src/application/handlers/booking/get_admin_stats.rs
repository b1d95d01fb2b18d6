//! GetAdminStatsHandler - Query handler for the admin dashboard.

use std::sync::Arc;

use crate::application::access::enforce;
use crate::domain::foundation::{DomainError, Identity, Operation, Resource};
use crate::domain::stats::AdminStats;
use crate::ports::StatsReader;

/// Handler computing dashboard figures.
pub struct GetAdminStatsHandler {
    reader: Arc<dyn StatsReader>,
    unit_price: i64,
}

impl GetAdminStatsHandler {
    /// `unit_price` is the estimated spend per confirmed guest.
    pub fn new(reader: Arc<dyn StatsReader>, unit_price: i64) -> Self {
        Self { reader, unit_price }
    }

    pub async fn handle(&self, identity: &Identity) -> Result<AdminStats, DomainError> {
        enforce(Operation::ViewAdminStats, identity, &Resource::none())?;
        let snapshot = self.reader.snapshot().await?;
        Ok(AdminStats::from_snapshot(snapshot, self.unit_price))
    }
}
