//! Authentication types for the domain layer.
//!
//! `Identity` is the verified caller of a request. It is built once by the
//! `CredentialVerifier` port, injected into request extensions by the HTTP
//! middleware, and handed explicitly to every application handler. Nothing
//! downstream mutates it.
//!
//! # Example
//!
//! ```ignore
//! // In HTTP middleware, after token verification:
//! let identity = verifier.verify(token).await?;
//! request.extensions_mut().insert(identity);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{DomainError, ErrorCode, Role, UserId};

/// Verified caller of a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    id: UserId,
    role: Role,
    email: String,
}

impl Identity {
    /// Creates a new identity.
    ///
    /// Called by `CredentialVerifier` adapters after a token checks out.
    pub fn new(id: UserId, role: Role, email: impl Into<String>) -> Self {
        Self {
            id,
            role,
            email: email.into(),
        }
    }

    /// Returns the caller's user ID.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the caller's role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the caller's email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// True when the caller holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

/// Authentication errors that can occur during token handling.
///
/// These errors are **domain-centric**: they describe what went wrong
/// from the application's perspective, not the token library's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// A token could not be produced.
    #[error("Token issuance failed: {0}")]
    IssuanceFailed(String),

    /// The credential collaborator is unavailable (hashing backend, key material).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the caller should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        let code = if err.requires_reauthentication() {
            ErrorCode::Unauthenticated
        } else {
            ErrorCode::InternalError
        };
        DomainError::new(code, err.to_string())
    }
}
