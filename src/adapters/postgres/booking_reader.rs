//! PostgreSQL implementation of BookingReader.
//!
//! Listings join bookings with their cafe (and customer, for staff views)
//! and come back newest booking date first.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error, parsed, timestamp};
use crate::domain::booking::{CustomerBooking, StaffBooking};
use crate::domain::foundation::{BookingId, CafeId, DomainError, UserId};
use crate::ports::BookingReader;

const STAFF_SELECT: &str = r#"
    SELECT b.id, b.booking_date, b.booking_time, b.people_count, b.status,
           b.special_requests, b.created_at,
           c.id AS cafe_id, c.name AS cafe_name,
           u.id AS user_id, u.name AS customer_name, u.email AS customer_email
    FROM bookings b
    JOIN cafes c ON c.id = b.cafe_id
    JOIN users u ON u.id = b.user_id
"#;

/// PostgreSQL implementation of BookingReader.
#[derive(Clone)]
pub struct PostgresBookingReader {
    pool: PgPool,
}

impl PostgresBookingReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingReader for PostgresBookingReader {
    async fn list_for_customer(
        &self,
        customer_id: &UserId,
    ) -> Result<Vec<CustomerBooking>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT b.id, b.booking_date, b.booking_time, b.people_count, b.status,
                   b.special_requests, b.created_at,
                   c.name AS cafe_name, c.location
            FROM bookings b
            JOIN cafes c ON c.id = b.cafe_id
            WHERE b.user_id = $1
            ORDER BY b.booking_date DESC, b.created_at DESC
            "#,
        )
        .bind(customer_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list customer bookings"))?;

        rows.iter().map(row_to_customer_booking).collect()
    }

    async fn list_for_owner(&self, owner_id: &UserId) -> Result<Vec<StaffBooking>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE c.owner_id = $1 ORDER BY b.booking_date DESC, b.created_at DESC",
            STAFF_SELECT
        ))
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list owner bookings"))?;

        rows.iter().map(row_to_staff_booking).collect()
    }

    async fn list_all(&self) -> Result<Vec<StaffBooking>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} ORDER BY b.booking_date DESC, b.created_at DESC",
            STAFF_SELECT
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list bookings"))?;

        rows.iter().map(row_to_staff_booking).collect()
    }
}

fn row_to_customer_booking(row: &PgRow) -> Result<CustomerBooking, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    Ok(CustomerBooking {
        id: BookingId::from_uuid(id),
        booking_date: column(row, "booking_date")?,
        booking_time: column(row, "booking_time")?,
        people_count: column(row, "people_count")?,
        status: parsed(row, "status")?,
        special_requests: column(row, "special_requests")?,
        cafe_name: column(row, "cafe_name")?,
        location: column(row, "location")?,
        created_at: Some(timestamp(row, "created_at")?),
    })
}

fn row_to_staff_booking(row: &PgRow) -> Result<StaffBooking, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let cafe_id: uuid::Uuid = column(row, "cafe_id")?;
    let user_id: uuid::Uuid = column(row, "user_id")?;
    Ok(StaffBooking {
        id: BookingId::from_uuid(id),
        booking_date: column(row, "booking_date")?,
        booking_time: column(row, "booking_time")?,
        people_count: column(row, "people_count")?,
        status: parsed(row, "status")?,
        special_requests: column(row, "special_requests")?,
        cafe_id: CafeId::from_uuid(cafe_id),
        cafe_name: column(row, "cafe_name")?,
        user_id: UserId::from_uuid(user_id),
        customer_name: column(row, "customer_name")?,
        customer_email: column(row, "customer_email")?,
        created_at: Some(timestamp(row, "created_at")?),
    })
}
