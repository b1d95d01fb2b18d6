//! Authentication adapters.
//!
//! Implementations of the credential ports:
//!
//! - `jwt` - HS256 token issuer and verifier
//! - `argon2_hasher` - Argon2id password hashing
//! - `mock` - Test verifier that doesn't require signed tokens

mod argon2_hasher;
mod jwt;
mod mock;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt::JwtCredentialService;
pub use mock::MockCredentialVerifier;
