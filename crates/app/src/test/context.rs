//! Test context for service-level tests.

use std::{sync::Arc, time::Duration};

use crate::{
    domain::{
        carts::StoreCartsService, checkout::StoreCheckoutService, orders::StoreOrdersService,
        products::StoreProductsService,
    },
    payments::{PaymentGateway, SimulatedPaymentGateway},
    store::Store,
};

pub(crate) struct TestContext {
    pub(crate) products: StoreProductsService,
    pub(crate) carts: StoreCartsService,
    pub(crate) orders: StoreOrdersService,
    pub(crate) checkout: StoreCheckoutService,
}

impl TestContext {
    /// Seeded store with a payment gateway that approves immediately.
    pub(crate) fn new() -> Self {
        Self::with_payment_delay(Duration::ZERO)
    }

    pub(crate) fn with_payment_delay(delay: Duration) -> Self {
        Self::with_payments(Arc::new(SimulatedPaymentGateway::new(delay)))
    }

    pub(crate) fn with_payments(payments: Arc<dyn PaymentGateway>) -> Self {
        let store = Store::seeded();

        Self {
            products: StoreProductsService::new(store.clone()),
            carts: StoreCartsService::new(store.clone()),
            orders: StoreOrdersService::new(store.clone()),
            checkout: StoreCheckoutService::new(store, payments),
        }
    }
}
