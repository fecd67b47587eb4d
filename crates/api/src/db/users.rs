//! User repository.

use std::sync::RwLock;

use trufa_core::{Role, UserId};

use super::RepositoryError;
use crate::models::{NewUser, User};

/// Repository for user accounts.
#[derive(Debug)]
pub struct UserRepository {
    inner: RwLock<UserTable>,
}

#[derive(Debug)]
struct UserTable {
    users: Vec<User>,
    next_id: UserId,
}

impl UserRepository {
    /// Create a repository holding the given users.
    ///
    /// New users get IDs after the highest seeded one.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .map(|u| u.id)
            .max()
            .map_or(UserId::new(1), |id| id.next());

        Self {
            inner: RwLock::new(UserTable { users, next_id }),
        }
    }

    /// Find the user with exactly this name and password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the store is unusable.
    pub fn find_by_credentials(
        &self,
        name: &str,
        password: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let table = self
            .inner
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(table
            .users
            .iter()
            .find(|u| u.has_credentials(name, password))
            .cloned())
    }

    /// Append a new user with the `user` role.
    ///
    /// The uniqueness check and the insert happen under one write lock.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the name or email is taken.
    /// Returns `RepositoryError::LockPoisoned` if the store is unusable.
    pub fn create(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let mut table = self
            .inner
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        if table
            .users
            .iter()
            .any(|u| u.name == new_user.name || u.email == new_user.email)
        {
            return Err(RepositoryError::Conflict(
                "name or email already exists".to_owned(),
            ));
        }

        let user = User {
            id: table.next_id,
            name: new_user.name,
            password: new_user.password,
            role: Role::User,
            email: new_user.email,
            telephone: new_user.telephone,
            full_name: new_user.full_name,
        };
        table.next_id = table.next_id.next();
        table.users.push(user.clone());

        Ok(user)
    }
}
