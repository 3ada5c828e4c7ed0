//! Add Cart Item Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::{
    carts::models::{CartId, NewCartItem},
    products::models::ProductId,
};

use crate::{
    carts::{CartResponse, errors::into_status_error},
    extensions::*,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    /// Product to add
    pub product_id: u64,

    /// Units to add, merged into any existing line for the product
    pub quantity: u32,
}

impl From<AddCartItemRequest> for NewCartItem {
    fn from(request: AddCartItemRequest) -> Self {
        NewCartItem {
            product_id: ProductId::new(request.product_id),
            quantity: request.quantity,
        }
    }
}

/// Add Cart Item Handler
///
/// Returns the updated cart.
#[endpoint(
    tags("carts"),
    summary = "Add Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Insufficient stock or invalid quantity"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.add",
    skip(cart, json, depot),
    fields(
        cart_id = tracing::field::Empty,
        product_id = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<u64>,
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let cart = CartId::new(cart.into_inner());
    let item: NewCartItem = json.into_inner().into();

    let span = tracing::Span::current();

    span.record("cart_id", tracing::field::display(cart));
    span.record("product_id", tracing::field::display(item.product_id));
    span.record("quantity", item.quantity);

    let updated = state
        .app
        .carts
        .add_item(cart, item)
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
