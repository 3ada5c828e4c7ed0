//! Cart Models

use rust_decimal::Decimal;

use crate::{
    domain::{carts::errors::CartsServiceError, products::models::ProductId},
    ids::TypedId,
};

/// Cart Id
pub type CartId = TypedId<Cart>;

/// Cart Model
///
/// `total` is a cache of the priced items and is recomputed on every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub items: Vec<CartItem>,
    pub total: Decimal,
}

impl Cart {
    /// An empty cart with a zero total.
    #[must_use]
    pub fn empty(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Merge an item into the cart.
    ///
    /// An existing entry for the same product keeps its position and has its quantity
    /// increased; otherwise the item is appended.
    /// Add `item`, summing quantities with an existing line for the same product.
    ///
    /// Leaves the cart untouched if the summed quantity does not fit in a `u32`.
    pub(crate) fn merge_item(&mut self, item: CartItem) -> Result<(), CartsServiceError> {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.product_id == item.product_id)
        {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(item.quantity)
                    .ok_or(CartsServiceError::InvalidQuantity)?;
            }
            None => self.items.push(item),
        }

        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.total = Decimal::ZERO;
    }
}

/// CartItem Model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// New Cart Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCart {
    pub id: CartId,
}

/// New Cart Item Model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl From<NewCartItem> for CartItem {
    fn from(item: NewCartItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}
