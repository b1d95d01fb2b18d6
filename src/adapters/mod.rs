//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - JWT tokens, argon2 password hashing, a mock verifier for tests
//! - `http` - axum REST API
//! - `memory` - In-memory store for tests and database-less runs
//! - `postgres` - sqlx PostgreSQL repositories and readers

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{Argon2PasswordHasher, JwtCredentialService, MockCredentialVerifier};
pub use memory::InMemoryStore;
