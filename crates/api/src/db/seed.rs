//! Startup data for the in-memory stores.

use trufa_core::{Price, ProductId, Role, UserId};

use crate::models::{Product, User};

/// The accounts present when the server starts.
#[must_use]
pub fn users() -> Vec<User> {
    vec![
        User {
            id: UserId::new(1),
            name: "admin".to_owned(),
            password: "123456".to_owned(),
            role: Role::Admin,
            email: "admin@email.com".to_owned(),
            telephone: Some("123456789".to_owned()),
            full_name: None,
        },
        User {
            id: UserId::new(2),
            name: "user".to_owned(),
            password: "123456".to_owned(),
            role: Role::User,
            email: "user@email.com".to_owned(),
            telephone: Some("987654321".to_owned()),
            full_name: None,
        },
    ]
}

/// The truffle catalog.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        product(
            1,
            "Trufa de Chocolate",
            500,
            "trufachocolate.jpg",
            "Deliciosa trufa recheada com ganache de chocolate meio amargo.",
            true,
        ),
        product(
            2,
            "Trufa de Maracujá",
            550,
            "trufamaracuja.jpg",
            "Trufa cremosa com recheio de maracujá e cobertura branca.",
            true,
        ),
        product(
            3,
            "Trufa de Coco",
            500,
            "trufacoco.jpg",
            "Recheio de coco com cobertura de chocolate ao leite.",
            true,
        ),
        product(
            4,
            "Trufa de Limão",
            550,
            "trufalimão.jpg",
            "Trufa refrescante com recheio de limão siciliano.",
            false,
        ),
        product(
            5,
            "Trufa de Morango",
            550,
            "trufamorango.jpg",
            "Trufa com recheio de morango e cobertura de chocolate ao leite.",
            false,
        ),
    ]
}

fn product(
    id: i64,
    name: &str,
    price_cents: i64,
    image: &str,
    description: &str,
    active: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(price_cents),
        image: image.to_owned(),
        description: description.to_owned(),
        quantity: 1,
        active,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_users_are_unique() {
        let users = users();
        let names: HashSet<_> = users.iter().map(|u| u.name.as_str()).collect();
        let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(names.len(), users.len());
        assert_eq!(emails.len(), users.len());
    }

    #[test]
    fn test_seed_catalog() {
        let products = products();
        let ids: Vec<i64> = products.iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let active: Vec<bool> = products.iter().map(|p| p.active).collect();
        assert_eq!(active, vec![true, true, true, false, false]);
    }
}
