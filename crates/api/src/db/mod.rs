//! In-memory repositories backing the shop API.
//!
//! # Stores
//!
//! - `users` - Accounts used by `/login` and `/register`
//! - `products` - The fixed truffle catalog
//! - `orders` - The order ledger
//!
//! Each repository owns its collection behind a lock and exposes whole
//! operations; callers never see the collection itself. Nothing is persisted:
//! every store starts from [`seed`] data (or empty) and is dropped with the
//! process.

pub mod orders;
pub mod products;
pub mod seed;
pub mod users;

pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

use thiserror::Error;

/// Errors returned by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// A writer panicked while holding the store lock.
    #[error("store lock poisoned")]
    LockPoisoned,
}
