//! Get Order Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use bazaar_app::domain::orders::models::OrderId;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::OrderResponse},
};

/// Get Order Handler
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let order = state
        .app
        .orders
        .get_order(OrderId::new(order.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
