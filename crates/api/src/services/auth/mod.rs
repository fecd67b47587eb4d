//! Authentication service.
//!
//! Credentials are compared in plaintext and nothing is issued on success:
//! each login is an independent check against the user store.

mod error;

pub use error::AuthError;

use tracing::{debug, info};

use crate::db::{RepositoryError, UserRepository};
use crate::models::{NewUser, User};

/// Registration input as received from the client.
///
/// Every field is optional here so that presence can be checked in one place.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub telephone: Option<String>,
}

/// Authentication service.
///
/// Handles login and registration against the user repository.
pub struct AuthService<'a> {
    users: &'a UserRepository,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(users: &'a UserRepository) -> Self {
        Self { users }
    }

    /// Login with name and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no user matches both fields.
    pub fn login(&self, name: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .users
            .find_by_credentials(name, password)?
            .ok_or(AuthError::InvalidCredentials)?;

        debug!(user_id = %user.id, role = %user.role, "Login succeeded");
        Ok(user)
    }

    /// Register a new user with the `user` role.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` if name, password or email is absent.
    /// Returns `AuthError::UserAlreadyExists` if the name or email is taken.
    pub fn register(&self, registration: Registration) -> Result<User, AuthError> {
        let name = required(registration.name, "name")?;
        let password = required(registration.password, "password")?;
        let email = required(registration.email, "email")?;

        let user = self
            .users
            .create(NewUser {
                name,
                password,
                email,
                telephone: registration.telephone,
                full_name: registration.full_name,
            })
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }
}

/// An empty string counts as missing.
fn required(value: Option<String>, field: &'static str) -> Result<String, AuthError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::MissingField(field))
}
