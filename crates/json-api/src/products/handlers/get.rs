//! Get Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use bazaar_app::domain::products::models::ProductId;

use crate::{
    extensions::*,
    products::{errors::into_status_error, handlers::ProductResponse},
};

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let product = state
        .app
        .products
        .get_product(ProductId::new(product.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
