//! Product catalog repository.

use std::sync::RwLock;

use trufa_core::ProductId;

use super::RepositoryError;
use crate::models::Product;

/// Repository for the product catalog.
#[derive(Debug)]
pub struct ProductRepository {
    products: RwLock<Vec<Product>>,
}

impl ProductRepository {
    /// Create a repository holding the given catalog, in order.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// All products in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the store is unusable.
    pub fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(products.clone())
    }

    /// Flip the `active` flag of a product in place.
    ///
    /// Returns the updated product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this ID.
    /// Returns `RepositoryError::LockPoisoned` if the store is unusable.
    pub fn toggle_active(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        product.active = !product.active;

        Ok(product.clone())
    }
}
