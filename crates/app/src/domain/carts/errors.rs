//! Carts service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart already exists")]
    AlreadyExists,

    #[error("cart not found")]
    NotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("insufficient stock for {product}")]
    InsufficientStock { product: String },

    #[error("quantity must be at least one and fit in a cart line")]
    InvalidQuantity,

    #[error("storage error")]
    Storage(#[source] StoreError),
}

impl CartsServiceError {
    /// Map a failed product lookup, where a missing row means the product, not the cart.
    pub(crate) fn from_product_lookup(error: StoreError) -> Self {
        match error {
            StoreError::RowNotFound => Self::ProductNotFound,
            other => other.into(),
        }
    }
}

impl From<StoreError> for CartsServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::RowNotFound => Self::NotFound,
            StoreError::UniqueViolation => Self::AlreadyExists,
            StoreError::CheckViolation => Self::Storage(error),
        }
    }
}
