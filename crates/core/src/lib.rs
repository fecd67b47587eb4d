//! Trufa Core - Shared types library.
//!
//! This crate provides the domain types used by the Trufa shop components:
//! - `api` - JSON backend for the shop front end
//! - `integration-tests` - HTTP-level tests against the API
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
