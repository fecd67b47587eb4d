//! User domain types.

use serde::Serialize;

use trufa_core::{Role, UserId};

/// A shop user.
///
/// Passwords are kept as plaintext; this backend makes no attempt at
/// credential security.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Stable user ID, assigned at creation.
    pub id: UserId,
    /// Login name, unique across users.
    pub name: String,
    /// Plaintext password.
    pub password: String,
    /// Permission level.
    pub role: Role,
    /// Email address, unique across users.
    pub email: String,
    /// Contact telephone.
    pub telephone: Option<String>,
    /// Full display name.
    pub full_name: Option<String>,
}

impl User {
    /// Whether this user matches the given credentials exactly.
    #[must_use]
    pub fn has_credentials(&self, name: &str, password: &str) -> bool {
        self.name == name && self.password == password
    }

    /// Public view of this user, without the password.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            telephone: self.telephone.clone(),
        }
    }
}

/// Data for a user that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub password: String,
    pub email: String,
    pub telephone: Option<String>,
    pub full_name: Option<String>,
}

/// The user projection returned by `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
}
