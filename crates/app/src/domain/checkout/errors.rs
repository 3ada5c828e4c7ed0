//! Checkout service errors.

use thiserror::Error;

use crate::{payments::PaymentError, store::StoreError};

#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    #[error("cart not found")]
    CartNotFound,

    #[error("cart is empty")]
    EmptyCart,

    #[error("cart changed while payment was being authorised")]
    CartChanged,

    #[error("product not found")]
    ProductNotFound,

    #[error("insufficient stock for {product}")]
    InsufficientStock { product: String },

    #[error("payment failed")]
    Payment(#[from] PaymentError),

    #[error("storage error")]
    Storage(#[source] StoreError),
}

impl CheckoutServiceError {
    pub(crate) fn from_product_lookup(error: StoreError) -> Self {
        match error {
            StoreError::RowNotFound => Self::ProductNotFound,
            other => Self::Storage(other),
        }
    }
}

impl From<StoreError> for CheckoutServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::RowNotFound => Self::CartNotFound,
            StoreError::UniqueViolation | StoreError::CheckViolation => Self::Storage(error),
        }
    }
}
