//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresUserRepository` - Accounts and credentials
//! - `PostgresCafeRepository` - Cafe rows
//! - `PostgresBookingRepository` - Booking writes and compare-and-set status updates
//! - `PostgresBookingReader` - Joined booking listings
//! - `PostgresStatsReader` - Admin dashboard counts
//!
//! The schema lives in `migrations/`.

mod booking_reader;
mod booking_repository;
mod cafe_repository;
mod stats_reader;
mod user_repository;

pub use booking_reader::PostgresBookingReader;
pub use booking_repository::PostgresBookingRepository;
pub use cafe_repository::PostgresCafeRepository;
pub use stats_reader::PostgresStatsReader;
pub use user_repository::PostgresUserRepository;

use std::str::FromStr;

use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};

/// Maps a sqlx failure to a `DatabaseError`, logging it once.
fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        DomainError::database(context, e)
    }
}

/// Reads one column, mapping decode failures to `DatabaseError`.
fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

/// Reads a text column holding an enum value.
fn parsed<T: FromStr>(row: &PgRow, name: &str) -> Result<T, DomainError> {
    let raw: String = column(row, name)?;
    raw.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid {} value: {}", name, raw),
        )
    })
}

fn timestamp(row: &PgRow, name: &str) -> Result<Timestamp, DomainError> {
    let dt: chrono::DateTime<chrono::Utc> = column(row, name)?;
    Ok(Timestamp::from_datetime(dt))
}

/// True when the error is a unique-constraint violation.
fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// True when the error is a foreign-key violation.
fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}
