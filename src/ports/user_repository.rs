//! User repository port.

use async_trait::async_trait;

use crate::domain::account::{User, UserWithCredentials};
use crate::domain::foundation::{DomainError, UserId};

/// Repository port for registered users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new user with its password hash.
    ///
    /// # Errors
    ///
    /// - `EmailAlreadyRegistered` if the email is taken
    /// - `DatabaseError` on persistence failure
    async fn create(&self, user: &User, password_hash: &str) -> Result<(), DomainError>;

    /// Find a user by its ID.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user and its password hash by (normalized) email.
    async fn find_by_email(&self, email: &str)
        -> Result<Option<UserWithCredentials>, DomainError>;

    /// Check whether an email is already registered.
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
