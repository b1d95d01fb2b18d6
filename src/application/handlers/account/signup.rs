//! SignupHandler - Command handler for registering users.

use std::sync::Arc;

use tracing::info;

use super::AuthResult;
use crate::domain::account::{SignupRequest, User};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::{PasswordHasher, TokenIssuer, UserRepository};

/// Handler for registering a new customer or owner.
pub struct SignupHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
}

impl SignupHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            issuer,
        }
    }

    pub async fn handle(&self, request: SignupRequest) -> Result<AuthResult, DomainError> {
        // 1. Validate and resolve role
        let account = request.validate()?;

        // 2. Reject duplicate email
        if self.users.email_exists(&account.email).await? {
            return Err(DomainError::new(
                ErrorCode::EmailAlreadyRegistered,
                "Email already registered",
            ));
        }

        // 3. Hash and persist
        let password_hash = self.hasher.hash(&account.password)?;
        let user = User {
            id: UserId::new(),
            name: account.name,
            email: account.email,
            phone: account.phone,
            role: account.role,
            created_at: Timestamp::now(),
        };
        self.users.create(&user, &password_hash).await?;

        // 4. Issue token
        let token = self.issuer.issue(&user.identity())?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(AuthResult { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{FakeHasher, FakeIssuer};
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::Role;

    fn handler(store: Arc<InMemoryStore>) -> SignupHandler {
        SignupHandler::new(store, Arc::new(FakeHasher), Arc::new(FakeIssuer))
    }

    fn request(email: &str, role: Option<&str>) -> SignupRequest {
        SignupRequest {
            name: Some("Meera".to_string()),
            email: Some(email.to_string()),
            phone: None,
            password: Some("s3cret!".to_string()),
            role: role.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn registers_user_and_issues_token() {
        let store = Arc::new(InMemoryStore::new());
        let result = handler(store.clone())
            .handle(request("meera@example.com", Some("owner")))
            .await
            .unwrap();

        assert_eq!(result.user.role, Role::Owner);
        assert!(result.token.token.contains(&result.user.id.to_string()));

        let stored = store.find_by_email("meera@example.com").await.unwrap().unwrap();
        assert_eq!(stored.password_hash, "hashed:s3cret!");
    }

    #[tokio::test]
    async fn admin_role_request_is_downgraded() {
        let store = Arc::new(InMemoryStore::new());
        let result = handler(store)
            .handle(request("x@example.com", Some("admin")))
            .await
            .unwrap();
        assert_eq!(result.user.role, Role::Customer);
    }

    #[tokio::test]
    async fn duplicate_email_fails() {
        let store = Arc::new(InMemoryStore::new());
        let handler = handler(store);
        handler.handle(request("dup@example.com", None)).await.unwrap();

        let err = handler
            .handle(request("DUP@example.com", None))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmailAlreadyRegistered);
        assert_eq!(err.message, "Email already registered");
    }
}
