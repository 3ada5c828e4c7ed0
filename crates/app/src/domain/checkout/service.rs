//! Checkout service.
//!
//! Turns a cart into an order. Payment is authorised first, outside any store transaction,
//! so a slow provider never blocks other requests. Everything after that runs in a single
//! transaction: stock is re-validated for every line, decremented, the order is recorded
//! with frozen prices, and the cart is emptied. Either all of it commits or none of it does.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    domain::{
        carts::{models::CartId, repositories::CartsRepository},
        checkout::errors::CheckoutServiceError,
        orders::{
            models::{Order, OrderItem, OrderStatus},
            repository::OrdersRepository,
        },
        products::repository::ProductsRepository,
    },
    payments::PaymentGateway,
    store::Store,
};

#[derive(Clone)]
pub struct StoreCheckoutService {
    store: Store,
    payments: Arc<dyn PaymentGateway>,
    carts_repository: CartsRepository,
    products_repository: ProductsRepository,
    orders_repository: OrdersRepository,
}

impl StoreCheckoutService {
    #[must_use]
    pub fn new(store: Store, payments: Arc<dyn PaymentGateway>) -> Self {
        Self {
            store,
            payments,
            carts_repository: CartsRepository::new(),
            products_repository: ProductsRepository::new(),
            orders_repository: OrdersRepository::new(),
        }
    }
}

impl std::fmt::Debug for StoreCheckoutService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreCheckoutService")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CheckoutService for StoreCheckoutService {
    async fn checkout(&self, cart: CartId) -> Result<Order, CheckoutServiceError> {
        let pending = {
            let tx = self.store.begin().await;

            self.carts_repository.get_cart(&tx, cart)?
        };

        if pending.is_empty() {
            return Err(CheckoutServiceError::EmptyCart);
        }

        self.payments.authorize(cart, pending.total).await?;

        let mut tx = self.store.begin().await;

        // Another checkout may have committed while payment was pending.
        let current = self.carts_repository.get_cart(&tx, cart)?;

        if current.is_empty() {
            return Err(CheckoutServiceError::EmptyCart);
        }

        // The order must match what was charged.
        if current.items != pending.items || current.total != pending.total {
            warn!(
                cart = %cart,
                authorised = %pending.total,
                current = %current.total,
                "rejected checkout: cart changed during payment"
            );

            return Err(CheckoutServiceError::CartChanged);
        }

        let mut items = Vec::with_capacity(current.items.len());

        for item in &current.items {
            let product = self
                .products_repository
                .get_product(&tx, item.product_id)
                .map_err(CheckoutServiceError::from_product_lookup)?;

            if product.stock < item.quantity {
                return Err(CheckoutServiceError::InsufficientStock {
                    product: product.name,
                });
            }

            items.push(OrderItem {
                product_id: product.id,
                quantity: item.quantity,
                unit_price: product.price,
            });
        }

        for item in &items {
            self.products_repository
                .adjust_stock(&mut tx, item.product_id, item.quantity)?;
        }

        let order = Order {
            id: self.orders_repository.next_order_id(&tx),
            items,
            total: current.total,
            created_at: Timestamp::now(),
            status: OrderStatus::Completed,
        };

        self.orders_repository.add_order(&mut tx, order.clone());
        self.carts_repository.clear_cart(&mut tx, cart)?;

        tx.commit();

        info!(
            cart = %cart,
            order = %order.id,
            total = %order.total,
            lines = order.items.len(),
            "checkout completed"
        );

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Converts the cart into an order, decrementing stock and emptying the cart.
    async fn checkout(&self, cart: CartId) -> Result<Order, CheckoutServiceError>;
}
