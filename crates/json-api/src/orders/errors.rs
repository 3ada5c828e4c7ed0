//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::Storage(source) => {
            error!("order storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
