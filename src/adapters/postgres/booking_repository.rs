//! PostgreSQL implementation of BookingRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error, parsed, timestamp};
use crate::domain::booking::{Booking, BookingDetail, BookingStatus};
use crate::domain::foundation::{BookingId, CafeId, DomainError, UserId};
use crate::ports::BookingRepository;

/// PostgreSQL implementation of BookingRepository.
#[derive(Clone)]
pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn save(&self, booking: &Booking) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, cafe_id, user_id, booking_date, booking_time,
                people_count, special_requests, status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(booking.id().as_uuid())
        .bind(booking.cafe_id().as_uuid())
        .bind(booking.user_id().as_uuid())
        .bind(booking.booking_date())
        .bind(booking.booking_time())
        .bind(booking.people_count())
        .bind(booking.special_requests())
        .bind(booking.status().as_str())
        .bind(booking.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to insert booking"))?;

        Ok(())
    }

    async fn find_detail(&self, id: &BookingId) -> Result<Option<BookingDetail>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT b.id, b.cafe_id, b.user_id, b.booking_date, b.booking_time,
                   b.people_count, b.special_requests, b.status, b.created_at,
                   c.owner_id AS cafe_owner_id
            FROM bookings b
            JOIN cafes c ON c.id = b.cafe_id
            WHERE b.id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to fetch booking"))?;

        match row {
            Some(row) => {
                let owner: uuid::Uuid = column(&row, "cafe_owner_id")?;
                Ok(Some(BookingDetail {
                    booking: row_to_booking(&row)?,
                    cafe_owner_id: UserId::from_uuid(owner),
                }))
            }
            None => Ok(None),
        }
    }

    async fn update_status(
        &self,
        id: &BookingId,
        expected: BookingStatus,
        next: BookingStatus,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE bookings SET status = $3 WHERE id = $1 AND status = $2")
            .bind(id.as_uuid())
            .bind(expected.as_str())
            .bind(next.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update booking status"))?;

        Ok(result.rows_affected() == 1)
    }

    async fn exists_for_cafe(&self, cafe_id: &CafeId) -> Result<bool, DomainError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM bookings WHERE cafe_id = $1)")
                .bind(cafe_id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(db_error("Failed to check cafe bookings"))?;
        Ok(exists)
    }
}

fn row_to_booking(row: &PgRow) -> Result<Booking, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let cafe_id: uuid::Uuid = column(row, "cafe_id")?;
    let user_id: uuid::Uuid = column(row, "user_id")?;
    Ok(Booking::reconstitute(
        BookingId::from_uuid(id),
        CafeId::from_uuid(cafe_id),
        UserId::from_uuid(user_id),
        column(row, "booking_date")?,
        column(row, "booking_time")?,
        column(row, "people_count")?,
        column(row, "special_requests")?,
        parsed(row, "status")?,
        timestamp(row, "created_at")?,
    ))
}
