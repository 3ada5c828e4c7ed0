//! Cart Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use bazaar_app::domain::carts::models::{Cart, CartItem};

use crate::money;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The cart id
    pub id: u64,

    /// Lines in insertion order, one per product
    pub items: Vec<CartItemResponse>,

    /// Sum of current unit prices times quantities
    pub total: f64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        CartResponse {
            id: cart.id.into_u64(),
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            total: money::to_json(cart.total),
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The product on this line
    pub product_id: u64,

    /// Units requested
    pub quantity: u32,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id.into_u64(),
            quantity: item.quantity,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rust_decimal::Decimal;

    use bazaar_app::domain::{
        carts::models::{Cart, CartId, CartItem},
        products::models::ProductId,
    };

    pub(crate) fn make_cart(id: u64) -> Cart {
        Cart {
            id: CartId::new(id),
            items: vec![CartItem {
                product_id: ProductId::new(3),
                quantity: 2,
            }],
            total: Decimal::new(91_00, 2),
        }
    }
}
