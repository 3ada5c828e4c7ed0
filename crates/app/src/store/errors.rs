//! Store errors.

use thiserror::Error;

use crate::domain::pricing::PricingError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no matching record")]
    RowNotFound,

    #[error("a record with the same id already exists")]
    UniqueViolation,

    #[error("record would violate a value constraint")]
    CheckViolation,
}

impl From<PricingError> for StoreError {
    fn from(error: PricingError) -> Self {
        match error {
            PricingError::Overflow => Self::CheckViolation,
        }
    }
}
