//! Business logic services for the shop API.
//!
//! # Services
//!
//! - `auth` - Plaintext login and self-registration over the user store
//!
//! Catalog and ledger operations are thin enough that handlers call the
//! repositories in [`crate::db`] directly.

pub mod auth;
