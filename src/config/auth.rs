//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Shortest signing secret accepted in production.
pub const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Authentication configuration (self-issued HS256 tokens)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC signing secret for access tokens
    pub jwt_secret: SecretString,

    /// Token lifetime in days
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: i64,

    /// `iss` claim written into and required on every token
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Admin account created at startup when absent; needs `admin_password`
    #[serde(default)]
    pub admin_email: Option<String>,

    #[serde(default)]
    pub admin_password: Option<SecretString>,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// Any non-empty secret is accepted in development; production needs
    /// at least [`MIN_PRODUCTION_SECRET_LEN`] bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_LEN {
            return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_LEN));
        }
        if !(1..=90).contains(&self.token_ttl_days) {
            return Err(ValidationError::InvalidTokenTtl);
        }
        if self.issuer.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__ISSUER"));
        }
        match (&self.admin_email, &self.admin_password) {
            (Some(_), None) => Err(ValidationError::MissingRequired("AUTH__ADMIN_PASSWORD")),
            (None, Some(_)) => Err(ValidationError::MissingRequired("AUTH__ADMIN_EMAIL")),
            _ => Ok(()),
        }
    }

    /// Configured admin credentials as `(email, password)`.
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        let email = self.admin_email.as_deref()?;
        let password = self.admin_password.as_ref()?;
        Some((email, password.expose_secret().as_str()))
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(String::new()),
            token_ttl_days: default_token_ttl_days(),
            issuer: default_issuer(),
            admin_email: None,
            admin_password: None,
        }
    }
}

fn default_token_ttl_days() -> i64 {
    7
}

fn default_issuer() -> String {
    "cafe-booking".to_string()
}
