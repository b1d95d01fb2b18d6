//! HTTP DTOs for account endpoints.

use serde::Serialize;

use crate::application::AuthResult;
use crate::domain::account::User;
use crate::domain::foundation::Identity;

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A user as returned to clients. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            phone: user.phone,
            role: user.role.to_string(),
        }
    }
}

/// Response for signup and login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub user: UserResponse,
    pub token: String,
    /// Token expiry as Unix seconds.
    pub expires_at: i64,
}

impl AuthResponse {
    pub fn new(message: impl Into<String>, result: AuthResult) -> Self {
        Self {
            success: true,
            message: message.into(),
            user: result.user.into(),
            token: result.token.token,
            expires_at: result.token.expires_at,
        }
    }
}

/// The identity carried by the caller's token.
#[derive(Debug, Clone, Serialize)]
pub struct IdentityResponse {
    pub id: String,
    pub email: String,
    pub role: String,
}

impl From<&Identity> for IdentityResponse {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id().to_string(),
            email: identity.email().to_string(),
            role: identity.role().to_string(),
        }
    }
}

/// Response for `GET /me`.
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub success: bool,
    pub message: String,
    pub user: IdentityResponse,
}
