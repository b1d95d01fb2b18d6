//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::{column, db_error, is_unique_violation, parsed, timestamp};
use crate::domain::account::{User, UserWithCredentials};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &User, password_hash: &str) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, phone, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.phone.as_deref())
        .bind(password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at.as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // Lost a race with a concurrent signup for the same email
            Err(e) if is_unique_violation(&e) => Err(DomainError::new(
                ErrorCode::EmailAlreadyRegistered,
                "Email already registered",
            )),
            Err(e) => Err(db_error("Failed to insert user")(e)),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            "SELECT id, name, email, phone, role, created_at FROM users WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to fetch user"))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserWithCredentials>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, phone, role, created_at, password_hash
            FROM users WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to fetch user by email"))?;

        match row {
            Some(row) => Ok(Some(UserWithCredentials {
                user: row_to_user(&row)?,
                password_hash: column(&row, "password_hash")?,
            })),
            None => Ok(None),
        }
    }

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(db_error("Failed to check email"))?;
        Ok(exists)
    }
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    Ok(User {
        id: UserId::from_uuid(id),
        name: column(row, "name")?,
        email: column(row, "email")?,
        phone: column(row, "phone")?,
        role: parsed(row, "role")?,
        created_at: timestamp(row, "created_at")?,
    })
}
