//! Token issuing port.
//!
//! Produces the self-contained, long-lived token handed out on signup and
//! login. Whatever an issuer signs, the matching `CredentialVerifier` must
//! accept until it expires.

use crate::domain::foundation::{AuthError, Identity};

/// A freshly issued access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    /// Expiry as Unix seconds.
    pub expires_at: i64,
}

/// Issues access tokens for an identity.
pub trait TokenIssuer: Send + Sync {
    /// Issue a token carrying `identity`.
    ///
    /// # Errors
    ///
    /// - `AuthError::IssuanceFailed` if signing fails
    fn issue(&self, identity: &Identity) -> Result<IssuedToken, AuthError>;
}
