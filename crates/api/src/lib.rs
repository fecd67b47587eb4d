//! Trufa API library.
//!
//! HTTP backend for the truffle shop front end: login and registration,
//! the product catalog, and customer orders. Everything is held in memory
//! and resets on restart.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use app::build_router;
pub use config::ApiConfig;
pub use state::AppState;
