//! Account handlers - signup, login and admin provisioning.

mod login;
mod seed_admin;
mod signup;

pub use login::LoginHandler;
pub use seed_admin::{SeedAdminCommand, SeedAdminHandler};
pub use signup::SignupHandler;

use crate::domain::account::User;
use crate::ports::IssuedToken;

/// A user together with a freshly issued token.
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub user: User,
    pub token: IssuedToken,
}
