//! PostgreSQL implementation of CafeRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error, is_foreign_key_violation, timestamp};
use crate::domain::cafe::Cafe;
use crate::domain::foundation::{CafeId, DomainError, ErrorCode, OwnedByUser, UserId};
use crate::ports::CafeRepository;

const CAFE_COLUMNS: &str =
    "id, owner_id, name, location, description, avg_price, capacity, theme, created_at";

/// PostgreSQL implementation of CafeRepository.
#[derive(Clone)]
pub struct PostgresCafeRepository {
    pool: PgPool,
}

impl PostgresCafeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CafeRepository for PostgresCafeRepository {
    async fn save(&self, cafe: &Cafe) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO cafes (
                id, owner_id, name, location, description, avg_price, capacity, theme, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(cafe.id().as_uuid())
        .bind(cafe.owner_id().as_uuid())
        .bind(cafe.name())
        .bind(cafe.location())
        .bind(cafe.description())
        .bind(cafe.avg_price())
        .bind(cafe.capacity())
        .bind(cafe.theme())
        .bind(cafe.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to insert cafe"))?;

        Ok(())
    }

    async fn update(&self, cafe: &Cafe) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE cafes SET
                name = $2,
                location = $3,
                description = $4,
                avg_price = $5,
                capacity = $6,
                theme = $7
            WHERE id = $1
            "#,
        )
        .bind(cafe.id().as_uuid())
        .bind(cafe.name())
        .bind(cafe.location())
        .bind(cafe.description())
        .bind(cafe.avg_price())
        .bind(cafe.capacity())
        .bind(cafe.theme())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update cafe"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::CafeNotFound, "Cafe not found"));
        }
        Ok(())
    }

    async fn delete(&self, id: &CafeId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM cafes WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await;

        let result = match result {
            Ok(result) => result,
            Err(e) if is_foreign_key_violation(&e) => {
                return Err(DomainError::new(
                    ErrorCode::CafeHasBookings,
                    "Cafe has bookings and cannot be deleted",
                ))
            }
            Err(e) => return Err(db_error("Failed to delete cafe")(e)),
        };

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::CafeNotFound, "Cafe not found"));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &CafeId) -> Result<Option<Cafe>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM cafes WHERE id = $1", CAFE_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch cafe"))?;

        row.as_ref().map(row_to_cafe).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Cafe>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM cafes ORDER BY created_at DESC",
            CAFE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list cafes"))?;

        rows.iter().map(row_to_cafe).collect()
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Cafe>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM cafes WHERE owner_id = $1 ORDER BY created_at DESC",
            CAFE_COLUMNS
        ))
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list cafes by owner"))?;

        rows.iter().map(row_to_cafe).collect()
    }
}

fn row_to_cafe(row: &PgRow) -> Result<Cafe, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let owner_id: uuid::Uuid = column(row, "owner_id")?;
    Ok(Cafe::reconstitute(
        CafeId::from_uuid(id),
        UserId::from_uuid(owner_id),
        column(row, "name")?,
        column(row, "location")?,
        column(row, "description")?,
        column(row, "avg_price")?,
        column(row, "capacity")?,
        column(row, "theme")?,
        timestamp(row, "created_at")?,
    ))
}
