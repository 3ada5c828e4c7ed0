//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use bazaar_app::{
    context::AppContext,
    domain::{
        carts::MockCartsService, checkout::MockCheckoutService, orders::MockOrdersService,
        products::MockProductsService,
    },
};

use crate::state::State;

/// Mocked services; any call without a matching expectation fails the test.
#[derive(Default)]
pub(crate) struct MockServices {
    pub(crate) products: MockProductsService,
    pub(crate) carts: MockCartsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) checkout: MockCheckoutService,
}

impl MockServices {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
            checkout: Arc::new(self.checkout),
        })
    }

    pub(crate) fn into_service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    MockServices {
        products,
        ..MockServices::default()
    }
    .into_service(route)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    MockServices {
        carts,
        ..MockServices::default()
    }
    .into_service(route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    MockServices {
        orders,
        ..MockServices::default()
    }
    .into_service(route)
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    MockServices {
        checkout,
        ..MockServices::default()
    }
    .into_service(route)
}
