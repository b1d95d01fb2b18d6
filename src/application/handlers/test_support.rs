//! Shared fixtures for handler tests.

use std::sync::Arc;

use crate::adapters::memory::InMemoryStore;
use crate::domain::account::User;
use crate::domain::cafe::{Cafe, CafeDetails};
use crate::domain::foundation::{AuthError, CafeId, Identity, Role, Timestamp, UserId};
use crate::ports::{CafeRepository, IssuedToken, PasswordHasher, TokenIssuer};

/// Reversible "hash" so tests can assert on stored values.
pub struct FakeHasher;

impl PasswordHasher for FakeHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("hashed:{}", password))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

/// Issues `token-<user id>`.
pub struct FakeIssuer;

impl TokenIssuer for FakeIssuer {
    fn issue(&self, identity: &Identity) -> Result<IssuedToken, AuthError> {
        Ok(IssuedToken {
            token: format!("token-{}", identity.id()),
            expires_at: Timestamp::now().plus_days(7).as_unix_secs(),
        })
    }
}

/// Registers a user of `role` directly in the store.
pub fn seed_user(store: &InMemoryStore, role: Role) -> Identity {
    let id = UserId::new();
    let email = format!("{}-{}@example.com", role, id);
    let user = User {
        id,
        name: format!("{} {}", role, id),
        email,
        phone: None,
        role,
        created_at: Timestamp::now(),
    };
    let identity = user.identity();
    store
        .insert_user(user, "hashed:x")
        .expect("seed user");
    identity
}

/// Stores a cafe owned by `owner`.
pub async fn seed_cafe(store: &Arc<InMemoryStore>, owner: &Identity, capacity: i64) -> Cafe {
    let cafe = Cafe::new(
        CafeId::new(),
        *owner.id(),
        CafeDetails {
            name: "Filter Coffee House".to_string(),
            location: Some("Bengaluru".to_string()),
            capacity,
            ..Default::default()
        },
    )
    .expect("valid cafe");
    CafeRepository::save(store.as_ref(), &cafe)
        .await
        .expect("save cafe");
    cafe
}
