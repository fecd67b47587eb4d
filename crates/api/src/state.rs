//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::db::{OrderRepository, ProductRepository, UserRepository, seed};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the in-memory repositories.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    users: UserRepository,
    products: ProductRepository,
    orders: OrderRepository,
}

impl AppState {
    /// Create application state with the seeded users and catalog and an
    /// empty order ledger.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                users: UserRepository::new(seed::users()),
                products: ProductRepository::new(seed::products()),
                orders: OrderRepository::new(),
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the user repository.
    #[must_use]
    pub fn users(&self) -> &UserRepository {
        &self.inner.users
    }

    /// Get a reference to the product repository.
    #[must_use]
    pub fn products(&self) -> &ProductRepository {
        &self.inner.products
    }

    /// Get a reference to the order repository.
    #[must_use]
    pub fn orders(&self) -> &OrderRepository {
        &self.inner.orders
    }
}
