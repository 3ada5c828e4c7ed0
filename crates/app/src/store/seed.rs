//! Demo catalog.

use rust_decimal::Decimal;

use crate::domain::products::models::{Product, ProductId};

pub(super) fn catalog() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Gaming Laptop".to_string(),
            price: Decimal::new(1_200_00, 2),
            stock: 10,
        },
        Product {
            id: ProductId::new(2),
            name: "Mechanical Keyboard".to_string(),
            price: Decimal::new(150_00, 2),
            stock: 25,
        },
        Product {
            id: ProductId::new(3),
            name: "Optical Mouse".to_string(),
            price: Decimal::new(45_50, 2),
            stock: 50,
        },
    ]
}
