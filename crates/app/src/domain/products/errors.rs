//! Products service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("invalid price value")]
    InvalidPrice,

    #[error("storage error")]
    Storage(#[source] StoreError),
}

impl From<StoreError> for ProductsServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::RowNotFound => Self::NotFound,
            StoreError::UniqueViolation => Self::AlreadyExists,
            StoreError::CheckViolation => Self::Storage(error),
        }
    }
}
