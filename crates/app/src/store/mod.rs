//! In-memory store.
//!
//! All state lives in a single [`Inventory`] behind one async mutex. Work happens inside a
//! [`Transaction`]: it holds the lock, mutates a private working copy, and only replaces the
//! shared inventory on [`Transaction::commit`]. Dropping an uncommitted transaction discards
//! every change made through it.

use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::{
    carts::models::{Cart, CartId},
    orders::models::Order,
    products::models::Product,
};

mod errors;
mod seed;

pub use errors::StoreError;

/// Id of the cart provisioned in every store.
pub const DEFAULT_CART_ID: CartId = CartId::new(1);

/// Every collection owned by the store.
#[derive(Debug, Clone, Default)]
pub(crate) struct Inventory {
    pub(crate) products: Vec<Product>,
    pub(crate) carts: Vec<Cart>,
    pub(crate) orders: Vec<Order>,
}

impl Inventory {
    fn with_default_cart() -> Self {
        Self {
            carts: vec![Cart::empty(DEFAULT_CART_ID)],
            ..Self::default()
        }
    }
}

/// Shared handle to the in-memory store.
#[derive(Debug, Clone)]
pub struct Store {
    inventory: Arc<Mutex<Inventory>>,
}

impl Store {
    /// Store with no products and the default cart.
    #[must_use]
    pub fn new() -> Self {
        Self::from_inventory(Inventory::with_default_cart())
    }

    /// Store with the demo catalog and the default cart.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_inventory(Inventory {
            products: seed::catalog(),
            ..Inventory::with_default_cart()
        })
    }

    fn from_inventory(inventory: Inventory) -> Self {
        Self {
            inventory: Arc::new(Mutex::new(inventory)),
        }
    }

    /// Begin an exclusive transaction.
    ///
    /// Waits until every other transaction has been committed or dropped.
    pub async fn begin(&self) -> Transaction {
        let guard = Arc::clone(&self.inventory).lock_owned().await;
        let working = guard.clone();

        Transaction { guard, working }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Exclusive working copy of the inventory.
#[derive(Debug)]
pub struct Transaction {
    guard: OwnedMutexGuard<Inventory>,
    working: Inventory,
}

impl Transaction {
    pub(crate) fn inventory(&self) -> &Inventory {
        &self.working
    }

    pub(crate) fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.working
    }

    /// Publish the working copy and release the lock.
    pub fn commit(self) {
        let Self { mut guard, working } = self;

        *guard = working;
    }
}
