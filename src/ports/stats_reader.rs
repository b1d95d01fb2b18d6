//! Stats reader port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::stats::StatsSnapshot;

/// Reads the raw counts behind the admin dashboard.
///
/// The figures need not come from one snapshot; slight skew under
/// concurrent writes is acceptable.
#[async_trait]
pub trait StatsReader: Send + Sync {
    async fn snapshot(&self) -> Result<StatsSnapshot, DomainError>;
}
