//! Self-issued HS256 access tokens.
//!
//! One service both signs tokens at signup/login and verifies them on every
//! authenticated request. Claims carry the caller's id, role and email so a
//! request never needs a user lookup to build its `Identity`.

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, Identity, Role, Timestamp, UserId};
use crate::ports::{CredentialVerifier, IssuedToken, TokenIssuer};

/// Claims written into every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    /// User ID
    sub: String,
    role: Role,
    email: String,
    iat: i64,
    exp: i64,
    iss: String,
}

/// HS256 token issuer and verifier.
pub struct JwtCredentialService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl_days: i64,
}

impl JwtCredentialService {
    /// Creates a service from the auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            issuer: config.issuer.clone(),
            ttl_days: config.token_ttl_days,
        }
    }

    fn issue_at(&self, identity: &Identity, issued_at: Timestamp) -> Result<IssuedToken, AuthError> {
        let expires_at = issued_at.plus_days(self.ttl_days);
        let claims = Claims {
            sub: identity.id().to_string(),
            role: identity.role(),
            email: identity.email().to_string(),
            iat: issued_at.as_unix_secs(),
            exp: expires_at.as_unix_secs(),
            iss: self.issuer.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::IssuanceFailed(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_at: claims.exp,
        })
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.leeway = 0;
        validation
    }
}

impl TokenIssuer for JwtCredentialService {
    fn issue(&self, identity: &Identity) -> Result<IssuedToken, AuthError> {
        self.issue_at(identity, Timestamp::now())
    }
}

#[async_trait]
impl CredentialVerifier for JwtCredentialService {
    async fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation()).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Invalid issuer in token");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            }
        })?;

        let claims = data.claims;
        let id: UserId = claims.sub.parse().map_err(|_| {
            tracing::warn!("Token subject is not a user id");
            AuthError::InvalidToken
        })?;

        Ok(Identity::new(id, claims.role, claims.email))
    }
}
