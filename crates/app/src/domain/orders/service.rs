//! Orders service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::orders::{
        errors::OrdersServiceError,
        models::{Order, OrderId},
        repository::OrdersRepository,
    },
    store::Store,
};

#[derive(Debug, Clone)]
pub struct StoreOrdersService {
    store: Store,
    repository: OrdersRepository,
}

impl StoreOrdersService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            repository: OrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for StoreOrdersService {
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let tx = self.store.begin().await;

        Ok(self.repository.list_orders(&tx))
    }

    async fn get_order(&self, order: OrderId) -> Result<Order, OrdersServiceError> {
        let tx = self.store.begin().await;

        Ok(self.repository.get_order(&tx, order)?)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves all orders in creation order.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderId) -> Result<Order, OrdersServiceError>;
}
