//! User entity and signup/login inputs.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, Identity, Role, Timestamp, UserId};

/// A registered user, without credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    pub created_at: Timestamp,
}

impl User {
    /// The identity a token for this user carries.
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.role, self.email.clone())
    }
}

/// A user row together with its stored password hash.
///
/// Only the login path ever loads this.
#[derive(Debug, Clone)]
pub struct UserWithCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Signup input as supplied by a client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// A signup that passed validation, ready for hashing and storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub role: Role,
}

impl SignupRequest {
    /// Validates the request and resolves the requested role.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name, email or password is missing
    /// - `InvalidFormat` if the email has no `@`
    pub fn validate(self) -> Result<NewAccount, DomainError> {
        let name = non_blank(self.name);
        let email = non_blank(self.email).map(|e| normalize_email(&e));
        let password = self.password.filter(|p| !p.is_empty());

        let (Some(name), Some(email), Some(password)) = (name, email, password) else {
            return Err(DomainError::new(
                ErrorCode::EmptyField,
                "Name, email, password are required",
            ));
        };

        if !email.contains('@') {
            return Err(DomainError::new(ErrorCode::InvalidFormat, "Invalid email address")
                .with_detail("field", "email"));
        }

        Ok(NewAccount {
            name,
            email,
            phone: non_blank(self.phone),
            password,
            role: Role::for_signup(self.role.as_deref()),
        })
    }
}

/// Login input as supplied by a client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns the normalized email and the password.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if either is missing
    pub fn validate(self) -> Result<(String, String), DomainError> {
        match (non_blank(self.email), self.password.filter(|p| !p.is_empty())) {
            (Some(email), Some(password)) => Ok((normalize_email(&email), password)),
            _ => Err(DomainError::new(
                ErrorCode::EmptyField,
                "Email and password are required",
            )),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(role: Option<&str>) -> SignupRequest {
        SignupRequest {
            name: Some("Asha".to_string()),
            email: Some(" Asha@Example.com ".to_string()),
            phone: Some("".to_string()),
            password: Some("hunter22".to_string()),
            role: role.map(str::to_string),
        }
    }

    #[test]
    fn signup_normalizes_email_and_phone() {
        let account = signup(None).validate().unwrap();
        assert_eq!(account.email, "asha@example.com");
        assert_eq!(account.phone, None);
        assert_eq!(account.role, Role::Customer);
    }

    #[test]
    fn signup_never_yields_admin() {
        assert_eq!(signup(Some("admin")).validate().unwrap().role, Role::Customer);
        assert_eq!(signup(Some("owner")).validate().unwrap().role, Role::Owner);
    }

    #[test]
    fn signup_requires_name_email_password() {
        let mut req = signup(None);
        req.password = None;
        let err = req.validate().unwrap_err();
        assert_eq!(err.message, "Name, email, password are required");
    }

    #[test]
    fn signup_rejects_email_without_at() {
        let mut req = signup(None);
        req.email = Some("asha.example.com".to_string());
        assert_eq!(req.validate().unwrap_err().code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn login_requires_both_fields() {
        let err = LoginRequest {
            email: Some("a@b.c".to_string()),
            password: None,
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);
    }

    #[test]
    fn user_identity_mirrors_the_row() {
        let user = User {
            id: UserId::new(),
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            phone: None,
            role: Role::Owner,
            created_at: Timestamp::now(),
        };
        let identity = user.identity();
        assert_eq!(identity.id(), &user.id);
        assert_eq!(identity.role(), Role::Owner);
        assert_eq!(identity.email(), "ravi@example.com");
    }
}
