//! Clear Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use bazaar_app::domain::carts::models::CartId;

use crate::{
    carts::{errors::into_status_error, handlers::CartResponse},
    extensions::*,
};

/// Clear Cart Handler
///
/// Removes every item from the cart. The cart itself stays.
#[endpoint(
    tags("carts"),
    summary = "Clear Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart emptied"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.clear",
    skip(cart, depot),
    fields(cart_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let cart = CartId::new(cart.into_inner());

    tracing::Span::current().record("cart_id", tracing::field::display(cart));

    let cleared = state
        .app
        .carts
        .clear_cart(cart)
        .await
        .map_err(into_status_error)?;

    tracing::info!(cart_id = %cart, "cleared cart");

    Ok(Json(cleared.into()))
}
