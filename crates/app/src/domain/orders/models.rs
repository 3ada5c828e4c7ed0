//! Order Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::products::models::ProductId, ids::TypedId};

/// Order Id
pub type OrderId = TypedId<Order>;

/// Order Model
///
/// Orders are immutable once created; item prices are frozen at checkout time.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub created_at: Timestamp,
    pub status: OrderStatus,
}

/// OrderItem Model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Decimal,
}

/// Order Status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Paid and stock reserved.
    Completed,
}

impl OrderStatus {
    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
