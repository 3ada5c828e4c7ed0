//! Product Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use bazaar_app::domain::products::models::Product;

use crate::money;

pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The product id
    pub id: u64,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Units available to sell
    pub stock: u32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.into_u64(),
            name: product.name,
            price: money::to_json(product.price),
            stock: product.stock,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rust_decimal::Decimal;

    use bazaar_app::domain::products::models::{Product, ProductId};

    pub(crate) fn make_product(id: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: "Mechanical Keyboard".to_owned(),
            price: Decimal::new(150_00, 2),
            stock: 25,
        }
    }
}
