//! LoginHandler - Command handler for password login.

use std::sync::Arc;

use tracing::{info, warn};

use super::AuthResult;
use crate::domain::account::LoginRequest;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{PasswordHasher, TokenIssuer, UserRepository};

/// Handler for exchanging email and password for a token.
///
/// Unknown email and wrong password produce the same error.
pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
}

impl LoginHandler {
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

    pub async fn handle(&self, request: LoginRequest) -> Result<AuthResult, DomainError> {
        let (email, password) = request.validate()?;

        // 1. Load user
        let Some(found) = self.users.find_by_email(&email).await? else {
            warn!("Login failed: unknown email");
            return Err(invalid_credentials());
        };

        // 2. Verify password
        if !self.hasher.verify(&password, &found.password_hash)? {
            warn!(user_id = %found.user.id, "Login failed: wrong password");
            return Err(invalid_credentials());
        }

        // 3. Issue token
        let token = self.issuer.issue(&found.user.identity())?;

        info!(user_id = %found.user.id, "User logged in");
        Ok(AuthResult {
            user: found.user,
            token,
        })
    }
}

fn invalid_credentials() -> DomainError {
    DomainError::new(ErrorCode::InvalidCredentials, "Invalid email or password")
}
