//! Create Product Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::products::models::{NewProduct, ProductId};

use crate::{
    extensions::*,
    money,
    products::{errors::into_status_error, handlers::ProductResponse},
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Caller-assigned product id
    pub id: u64,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Initial stock
    pub stock: u32,
}

impl CreateProductRequest {
    fn into_new_product(self) -> Result<NewProduct, StatusError> {
        Ok(NewProduct {
            id: ProductId::new(self.id),
            name: self.name,
            price: money::from_json(self.price)?,
            stock: self.stock,
        })
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().into_new_product()?)
        .await
        .map_err(into_status_error)?;

    res.created_at(format!("/products/{}", product.id))?;

    Ok(Json(product.into()))
}
