//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Auth Ports
//!
//! - `CredentialVerifier` - Bearer token to `Identity`
//! - `TokenIssuer` - `Identity` to bearer token
//! - `PasswordHasher` - One-way password hashing
//!
//! ## Persistence Ports
//!
//! - `UserRepository`, `CafeRepository`, `BookingRepository` - Write side
//! - `BookingReader`, `StatsReader` - Read side

mod booking_reader;
mod booking_repository;
mod cafe_repository;
mod credential_verifier;
mod password_hasher;
mod stats_reader;
mod token_issuer;
mod user_repository;

pub use booking_reader::BookingReader;
pub use booking_repository::BookingRepository;
pub use cafe_repository::CafeRepository;
pub use credential_verifier::CredentialVerifier;
pub use password_hasher::PasswordHasher;
pub use stats_reader::StatsReader;
pub use token_issuer::{IssuedToken, TokenIssuer};
pub use user_repository::UserRepository;
