//! Order Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use bazaar_app::domain::orders::models::{Order, OrderItem};

use crate::money;

pub(crate) mod get;
pub(crate) mod index;

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The order id, assigned sequentially from 1
    pub id: u64,

    /// Purchased lines with the unit price paid
    pub items: Vec<OrderItemResponse>,

    /// Amount charged
    pub total: f64,

    /// When the order was placed (RFC 3339)
    pub created_at: String,

    /// Order status
    pub status: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id.into_u64(),
            items: order.items.into_iter().map(OrderItemResponse::from).collect(),
            total: money::to_json(order.total),
            created_at: order.created_at.to_string(),
            status: order.status.to_string(),
        }
    }
}

/// Order Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    /// The purchased product
    pub product_id: u64,

    /// Units purchased
    pub quantity: u32,

    /// Unit price frozen at checkout
    pub unit_price: f64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id.into_u64(),
            quantity: item.quantity,
            unit_price: money::to_json(item.unit_price),
        }
    }
}
