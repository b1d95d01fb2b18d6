//! PostgreSQL implementation of StatsReader.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{column, db_error};
use crate::domain::foundation::DomainError;
use crate::domain::stats::StatsSnapshot;
use crate::ports::StatsReader;

/// PostgreSQL implementation of StatsReader.
///
/// All figures come from one statement, so they share a snapshot.
#[derive(Clone)]
pub struct PostgresStatsReader {
    pool: PgPool,
}

impl PostgresStatsReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsReader for PostgresStatsReader {
    async fn snapshot(&self) -> Result<StatsSnapshot, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM bookings) AS total_bookings,
                (SELECT COUNT(*) FROM bookings WHERE status = 'confirmed') AS confirmed_bookings,
                (SELECT COALESCE(SUM(people_count), 0)::BIGINT
                   FROM bookings WHERE status = 'confirmed') AS confirmed_people,
                (SELECT COUNT(*) FROM cafes) AS total_cafes,
                (SELECT COUNT(DISTINCT owner_id) FROM cafes) AS active_owners
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to read booking stats"))?;

        Ok(StatsSnapshot {
            total_bookings: column(&row, "total_bookings")?,
            confirmed_bookings: column(&row, "confirmed_bookings")?,
            confirmed_people: column(&row, "confirmed_people")?,
            total_cafes: column(&row, "total_cafes")?,
            active_owners: column(&row, "active_owners")?,
        })
    }
}
