//! Order ledger types.

use serde::Serialize;
use serde_json::Value;

use trufa_core::OrderId;

/// A submitted order.
///
/// Line items and contact fields are kept exactly as the client sent them;
/// the ledger does not interpret them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "produtos")]
    pub items: Vec<Value>,
    #[serde(rename = "nome")]
    pub customer_name: Value,
    #[serde(rename = "telefone")]
    pub customer_phone: Value,
}

/// An order before it has been assigned an ID.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub items: Vec<Value>,
    pub customer_name: Value,
    pub customer_phone: Value,
}

impl NewOrder {
    pub(crate) fn into_order(self, id: OrderId) -> Order {
        Order {
            id,
            items: self.items,
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
        }
    }
}
