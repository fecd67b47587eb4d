//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /api/health      - Health check
//!
//! # Auth
//! POST   /login           - Check credentials, return the user projection
//! POST   /register        - Create a `user` account
//!
//! # Products
//! GET    /produtos        - Full catalog
//! PATCH  /produtos/{id}   - Toggle a product's active flag
//!
//! # Orders
//! POST   /pedidos         - Submit an order
//! GET    /pedidos         - List orders
//! DELETE /pedidos         - Delete every order
//! DELETE /pedidos/{id}    - Delete one order
//! ```
//!
//! Any other path falls through to the static file service.

pub mod auth;
pub mod health;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", patch(products::toggle))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(orders::index)
                .post(orders::create)
                .delete(orders::delete_all),
        )
        .route("/{id}", delete(orders::delete))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        // Auth routes
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        // Catalog and ledger
        .nest("/produtos", product_routes())
        .nest("/pedidos", order_routes())
}

/// Parse an ID path segment the way the front end has always been served:
/// leading whitespace and an optional sign are accepted, then the longest run
/// of ASCII digits; anything after the digits is ignored.
///
/// Returns `None` when there are no digits, which callers treat as "not found".
#[must_use]
pub fn parse_path_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, trimmed.get(1..)?),
        Some(b'+') => (false, trimmed.get(1..)?),
        _ => (false, trimmed),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = unsigned.get(..digits_end)?;
    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}
