//! Checkout Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use bazaar_app::domain::checkout::CheckoutServiceError;

use crate::observability::CheckoutOutcome;

pub(crate) fn outcome(result: Result<(), &CheckoutServiceError>) -> CheckoutOutcome {
    match result {
        Ok(()) => CheckoutOutcome::Completed,
        Err(CheckoutServiceError::Payment(_)) => CheckoutOutcome::PaymentFailed,
        Err(CheckoutServiceError::Storage(_)) => CheckoutOutcome::Failed,
        Err(_) => CheckoutOutcome::Rejected,
    }
}

pub(crate) fn into_status_error(error: CheckoutServiceError) -> StatusError {
    match error {
        CheckoutServiceError::CartNotFound => StatusError::not_found().brief("Cart not found"),
        CheckoutServiceError::ProductNotFound => {
            StatusError::not_found().brief("Product not found")
        }
        CheckoutServiceError::EmptyCart => StatusError::bad_request().brief("Cart is empty"),
        CheckoutServiceError::CartChanged => {
            StatusError::conflict().brief("Cart changed during checkout, please retry")
        }
        CheckoutServiceError::InsufficientStock { product } => {
            StatusError::bad_request().brief(format!("Insufficient stock for {product}"))
        }
        CheckoutServiceError::Payment(source) => {
            warn!("payment authorisation failed: {source}");

            StatusError::bad_gateway().brief("Payment authorisation failed")
        }
        CheckoutServiceError::Storage(source) => {
            error!("checkout storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
