//! Orders Repository

use crate::{
    domain::orders::models::{Order, OrderId},
    store::{StoreError, Transaction},
};

#[derive(Debug, Clone, Default)]
pub(crate) struct OrdersRepository;

impl OrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn list_orders(&self, tx: &Transaction) -> Vec<Order> {
        tx.inventory().orders.clone()
    }

    pub(crate) fn get_order(&self, tx: &Transaction, order: OrderId) -> Result<Order, StoreError> {
        tx.inventory()
            .orders
            .iter()
            .find(|candidate| candidate.id == order)
            .cloned()
            .ok_or(StoreError::RowNotFound)
    }

    /// Id for the next order: one past the number of orders recorded so far.
    pub(crate) fn next_order_id(&self, tx: &Transaction) -> OrderId {
        let count = u64::try_from(tx.inventory().orders.len()).unwrap_or(u64::MAX);

        OrderId::new(count.saturating_add(1))
    }

    pub(crate) fn add_order(&self, tx: &mut Transaction, order: Order) {
        tx.inventory_mut().orders.push(order);
    }
}
