//! Carts Repository

use rust_decimal::Decimal;

use crate::{
    domain::{
        carts::models::{Cart, CartId},
        pricing,
    },
    store::{Inventory, StoreError, Transaction},
};

#[derive(Debug, Clone, Default)]
pub(crate) struct CartsRepository;

impl CartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn get_cart(&self, tx: &Transaction, cart: CartId) -> Result<Cart, StoreError> {
        tx.inventory()
            .carts
            .iter()
            .find(|candidate| candidate.id == cart)
            .cloned()
            .ok_or(StoreError::RowNotFound)
    }

    pub(crate) fn create_cart(&self, tx: &mut Transaction, cart: CartId) -> Result<Cart, StoreError> {
        let carts = &mut tx.inventory_mut().carts;

        if carts.iter().any(|existing| existing.id == cart) {
            return Err(StoreError::UniqueViolation);
        }

        let created = Cart::empty(cart);

        carts.push(created.clone());

        Ok(created)
    }

    /// Replace the stored cart with `cart`, recomputing its total first.
    pub(crate) fn save_cart(&self, tx: &mut Transaction, mut cart: Cart) -> Result<Cart, StoreError> {
        cart.total = cart_total(tx.inventory(), &cart)?;

        let slot = tx
            .inventory_mut()
            .carts
            .iter_mut()
            .find(|existing| existing.id == cart.id)
            .ok_or(StoreError::RowNotFound)?;

        *slot = cart.clone();

        Ok(cart)
    }

    pub(crate) fn clear_cart(&self, tx: &mut Transaction, cart: CartId) -> Result<Cart, StoreError> {
        let slot = tx
            .inventory_mut()
            .carts
            .iter_mut()
            .find(|existing| existing.id == cart)
            .ok_or(StoreError::RowNotFound)?;

        slot.clear();

        Ok(slot.clone())
    }

    /// Recompute the total of every cart from current catalog prices.
    pub(crate) fn refresh_totals(&self, tx: &mut Transaction) -> Result<(), StoreError> {
        let totals = tx
            .inventory()
            .carts
            .iter()
            .map(|cart| cart_total(tx.inventory(), cart))
            .collect::<Result<Vec<_>, _>>()?;

        for (cart, total) in tx.inventory_mut().carts.iter_mut().zip(totals) {
            cart.total = total;
        }

        Ok(())
    }
}

fn cart_total(inventory: &Inventory, cart: &Cart) -> Result<Decimal, StoreError> {
    let lines = cart
        .items
        .iter()
        .map(|item| {
            inventory
                .products
                .iter()
                .find(|product| product.id == item.product_id)
                .map(|product| (product.price, item.quantity))
                .ok_or(StoreError::RowNotFound)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(pricing::total_price(lines)?)
}
