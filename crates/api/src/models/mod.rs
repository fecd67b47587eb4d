//! Domain models for the shop API.
//!
//! These are the records held by the in-memory repositories in [`crate::db`].
//! JSON field names follow what the front end already consumes, which is why
//! some fields carry Portuguese `serde` renames.

pub mod order;
pub mod product;
pub mod user;

pub use order::{NewOrder, Order};
pub use product::Product;
pub use user::{NewUser, User, UserProfile};
