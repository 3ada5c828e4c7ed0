//! Create Cart Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::carts::models::{CartId, NewCart};

use crate::{
    carts::{errors::into_status_error, handlers::CartResponse},
    extensions::*,
};

/// Create Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartRequest {
    /// Caller-assigned cart id
    pub id: u64,
}

impl From<CreateCartRequest> for NewCart {
    fn from(request: CreateCartRequest) -> Self {
        NewCart {
            id: CartId::new(request.id),
        }
    }
}

/// Create Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::CONFLICT, description = "Cart already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let cart = state
        .app
        .carts
        .create_cart(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.created_at(format!("/carts/{}", cart.id))?;

    Ok(Json(cart.into()))
}
