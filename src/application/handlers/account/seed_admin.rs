//! SeedAdminHandler - provisions the configured admin account at startup.

use std::sync::Arc;

use tracing::info;

use crate::domain::account::{SignupRequest, User};
use crate::domain::foundation::{DomainError, Role, Timestamp, UserId};
use crate::ports::{PasswordHasher, UserRepository};

/// Admin credentials supplied by the operator.
#[derive(Debug, Clone)]
pub struct SeedAdminCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Creates the admin account unless its email is already registered.
///
/// Signup never grants admin, so this is the only way an admin appears
/// outside a manual database insert.
pub struct SeedAdminHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl SeedAdminHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Returns the new admin, or `None` when the email already exists.
    pub async fn handle(&self, cmd: SeedAdminCommand) -> Result<Option<User>, DomainError> {
        let mut account = SignupRequest {
            name: Some(cmd.name),
            email: Some(cmd.email),
            phone: None,
            password: Some(cmd.password),
            role: None,
        }
        .validate()?;
        account.role = Role::Admin;

        if self.users.email_exists(&account.email).await? {
            info!(email = %account.email, "Admin account already present");
            return Ok(None);
        }

        let password_hash = self.hasher.hash(&account.password)?;
        let user = User {
            id: UserId::new(),
            name: account.name,
            email: account.email,
            phone: None,
            role: account.role,
            created_at: Timestamp::now(),
        };
        self.users.create(&user, &password_hash).await?;

        info!(user_id = %user.id, email = %user.email, "Admin account provisioned");
        Ok(Some(user))
    }
}
