//! Product catalog types.

use serde::Serialize;

use trufa_core::{Price, ProductId};

/// A catalog product.
///
/// `active` is the only field that changes after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Image filename, served from the static directory.
    pub image: String,
    #[serde(rename = "descricao")]
    pub description: String,
    pub quantity: u32,
    /// Whether the product is offered in the shop.
    #[serde(rename = "ativo")]
    pub active: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let product = Product {
            id: ProductId::new(2),
            name: "Trufa de Maracujá".to_string(),
            price: Price::from_cents(550),
            image: "trufamaracuja.jpg".to_string(),
            description: "Trufa cremosa".to_string(),
            quantity: 1,
            active: true,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["price"], 5.5);
        assert_eq!(json["descricao"], "Trufa cremosa");
        assert_eq!(json["ativo"], true);
        assert!(json.get("active").is_none());
    }
}
