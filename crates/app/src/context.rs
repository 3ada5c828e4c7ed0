//! App Context

use std::sync::Arc;

use crate::{
    domain::{
        carts::{CartsService, StoreCartsService},
        checkout::{CheckoutService, StoreCheckoutService},
        orders::{OrdersService, StoreOrdersService},
        products::{ProductsService, StoreProductsService},
    },
    payments::PaymentGateway,
    store::Store,
};

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub checkout: Arc<dyn CheckoutService>,
}

impl AppContext {
    /// Build application context with every service sharing `store`.
    #[must_use]
    pub fn new(store: Store, payments: Arc<dyn PaymentGateway>) -> Self {
        Self {
            products: Arc::new(StoreProductsService::new(store.clone())),
            carts: Arc::new(StoreCartsService::new(store.clone())),
            orders: Arc::new(StoreOrdersService::new(store.clone())),
            checkout: Arc::new(StoreCheckoutService::new(store, payments)),
        }
    }
}
