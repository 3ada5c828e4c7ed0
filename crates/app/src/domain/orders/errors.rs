//! Orders service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("storage error")]
    Storage(#[source] StoreError),
}

impl From<StoreError> for OrdersServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::RowNotFound => Self::NotFound,
            StoreError::UniqueViolation | StoreError::CheckViolation => Self::Storage(error),
        }
    }
}
