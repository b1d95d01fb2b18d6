//! Mock credential verifier for testing.
//!
//! Maps fixed bearer strings to identities so HTTP tests can authenticate
//! without signing real tokens.
//!
//! # Example
//!
//! ```ignore
//! use cafe_booking::adapters::auth::MockCredentialVerifier;
//! use cafe_booking::domain::foundation::{Identity, Role, UserId};
//!
//! let verifier = MockCredentialVerifier::new()
//!     .with_identity("owner-token", Identity::new(UserId::new(), Role::Owner, "o@example.com"));
//!
//! let identity = verifier.verify("owner-token").await?;
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Identity};
use crate::ports::CredentialVerifier;

/// Mock credential verifier.
///
/// Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockCredentialVerifier {
    tokens: RwLock<HashMap<String, Identity>>,
    /// Returned for every verification when set
    force_error: RwLock<Option<AuthError>>,
}

impl MockCredentialVerifier {
    /// Creates a new empty mock verifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token that verifies to the given identity.
    pub fn with_identity(self, token: impl Into<String>, identity: Identity) -> Self {
        self.add_token(token, identity);
        self
    }

    /// Forces all verifications to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self
            .force_error
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }

    /// Registers a token at runtime.
    pub fn add_token(&self, token: impl Into<String>, identity: Identity) {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.into(), identity);
    }

    /// Removes a token, making it invalid.
    pub fn remove_token(&self, token: &str) {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token);
    }
}

#[async_trait]
impl CredentialVerifier for MockCredentialVerifier {
    async fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
