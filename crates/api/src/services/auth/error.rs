//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No user matches the name/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A required registration field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Name or email already registered.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Repository error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
