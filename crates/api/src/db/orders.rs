//! Order ledger repository.
//!
//! Order IDs come from a counter that starts at 1 and only moves forward;
//! deleting orders (one or all) never frees an ID for reuse.

use std::sync::RwLock;

use trufa_core::OrderId;

use super::RepositoryError;
use crate::models::{NewOrder, Order};

/// Repository for submitted orders.
#[derive(Debug)]
pub struct OrderRepository {
    inner: RwLock<Ledger>,
}

#[derive(Debug)]
struct Ledger {
    orders: Vec<Order>,
    next_id: OrderId,
}

impl Default for OrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderRepository {
    /// Create an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: RwLock::new(Ledger {
                orders: Vec::new(),
                next_id: OrderId::new(1),
            }),
        }
    }

    /// Append an order, assigning it the next ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the store is unusable.
    pub fn create(&self, new_order: NewOrder) -> Result<Order, RepositoryError> {
        let mut ledger = self
            .inner
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let order = new_order.into_order(ledger.next_id);
        ledger.next_id = ledger.next_id.next();
        ledger.orders.push(order.clone());

        Ok(order)
    }

    /// All orders in submission order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the store is unusable.
    pub fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let ledger = self
            .inner
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(ledger.orders.clone())
    }

    /// Remove one order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this ID.
    /// Returns `RepositoryError::LockPoisoned` if the store is unusable.
    pub fn delete(&self, id: OrderId) -> Result<Order, RepositoryError> {
        let mut ledger = self
            .inner
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let index = ledger
            .orders
            .iter()
            .position(|o| o.id == id)
            .ok_or(RepositoryError::NotFound)?;

        Ok(ledger.orders.remove(index))
    }

    /// Remove every order. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the store is unusable.
    pub fn clear(&self) -> Result<usize, RepositoryError> {
        let mut ledger = self
            .inner
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let removed = ledger.orders.len();
        ledger.orders.clear();

        Ok(removed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn new_order(name: &str) -> NewOrder {
        NewOrder {
            items: vec![json!({"id": 1, "quantity": 2})],
            customer_name: json!(name),
            customer_phone: json!("11999990000"),
        }
    }

    #[test]
    fn test_ids_increase_from_one() {
        let repo = OrderRepository::new();
        assert_eq!(repo.create(new_order("Ana")).unwrap().id, OrderId::new(1));
        assert_eq!(repo.create(new_order("Bia")).unwrap().id, OrderId::new(2));
        assert_eq!(repo.list().unwrap().len(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let repo = OrderRepository::new();
        let first = repo.create(new_order("Ana")).unwrap();
        repo.delete(first.id).unwrap();

        let second = repo.create(new_order("Bia")).unwrap();
        assert_eq!(second.id, OrderId::new(2));
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let repo = OrderRepository::new();
        repo.create(new_order("Ana")).unwrap();
        repo.create(new_order("Bia")).unwrap();
        assert_eq!(repo.clear().unwrap(), 2);

        assert_eq!(repo.create(new_order("Caio")).unwrap().id, OrderId::new(3));
    }

    #[test]
    fn test_delete_keeps_remaining_order() {
        let repo = OrderRepository::new();
        repo.create(new_order("Ana")).unwrap();
        repo.create(new_order("Bia")).unwrap();
        repo.create(new_order("Caio")).unwrap();

        let removed = repo.delete(OrderId::new(2)).unwrap();
        assert_eq!(removed.customer_name, "Bia");

        let names: Vec<Value> = repo
            .list()
            .unwrap()
            .into_iter()
            .map(|o| o.customer_name)
            .collect();
        assert_eq!(names, vec!["Ana", "Caio"]);
    }

    #[test]
    fn test_delete_unknown_order() {
        let repo = OrderRepository::new();
        let err = repo.delete(OrderId::new(1)).unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn test_clear_empty_ledger() {
        let repo = OrderRepository::new();
        assert_eq!(repo.clear().unwrap(), 0);
        assert!(repo.list().unwrap().is_empty());
    }
}
