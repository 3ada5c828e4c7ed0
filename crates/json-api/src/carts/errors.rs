//! Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::AlreadyExists => StatusError::conflict().brief("Cart already exists"),
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        CartsServiceError::InsufficientStock { product } => {
            StatusError::bad_request().brief(format!("Insufficient stock for {product}"))
        }
        CartsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Quantity must be at least one and fit in a cart line")
        }
        CartsServiceError::Storage(source) => {
            error!("cart storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
