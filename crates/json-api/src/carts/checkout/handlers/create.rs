//! Checkout Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use bazaar_app::domain::carts::models::CartId;

use crate::{
    carts::checkout::errors::{into_status_error, outcome},
    extensions::*,
    observability::record_checkout,
    orders::OrderResponse,
};

/// Checkout Cart Handler
///
/// Authorises payment for the cart, then turns it into an order. Stock is
/// decremented and the cart emptied only when the whole order can be fulfilled.
#[endpoint(
    tags("carts"),
    summary = "Checkout Cart",
    responses(
        (status_code = StatusCode::OK, description = "Order placed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart is empty or stock is insufficient"),
        (status_code = StatusCode::CONFLICT, description = "Cart changed during payment"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Payment authorisation failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.checkout",
    skip(cart, depot),
    fields(
        cart_id = tracing::field::Empty,
        order_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let cart = CartId::new(cart.into_inner());

    let span = tracing::Span::current();

    span.record("cart_id", tracing::field::display(cart));

    let result = state.app.checkout.checkout(cart).await;

    record_checkout(outcome(result.as_ref().map(|_| ())));

    let order = result.map_err(into_status_error)?;

    span.record("order_id", tracing::field::display(order.id));

    tracing::info!(cart_id = %cart, order_id = %order.id, "checked out cart");

    Ok(Json(order.into()))
}
