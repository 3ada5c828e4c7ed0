//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::InvalidPrice => {
            StatusError::bad_request().brief("Price must not be negative")
        }
        ProductsServiceError::Storage(source) => {
            error!("product storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
