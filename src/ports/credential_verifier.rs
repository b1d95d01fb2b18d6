//! Credential verification port.
//!
//! Turns a bearer token into the caller's [`Identity`]. The HTTP middleware
//! is the only consumer; everything downstream receives the identity value.
//!
//! # Contract
//!
//! Implementations must:
//! - Validate the token signature
//! - Validate the issuer and expiry claims
//! - Return `AuthError::InvalidToken` for malformed/bad signature tokens
//! - Return `AuthError::TokenExpired` for expired tokens
//! - Return `AuthError::ServiceUnavailable` for transient errors

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Identity};

/// Verifies bearer tokens and extracts the caller identity.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify a raw token (without the "Bearer " prefix).
    async fn verify(&self, token: &str) -> Result<Identity, AuthError>;
}
