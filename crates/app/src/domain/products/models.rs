//! Product Models

use rust_decimal::Decimal;

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<Product>;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

impl Product {
    /// Copy of this product with a different stock level.
    #[must_use]
    pub fn with_stock(&self, stock: u32) -> Self {
        Self {
            stock,
            ..self.clone()
        }
    }
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

impl From<NewProduct> for Product {
    fn from(product: NewProduct) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            stock: product.stock,
        }
    }
}

/// Product Update Model
///
/// Replaces every mutable attribute of the stored product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}
