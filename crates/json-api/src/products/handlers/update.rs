//! Update Product Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::products::models::{ProductId, ProductUpdate};

use crate::{
    extensions::*,
    money,
    products::{errors::into_status_error, handlers::ProductResponse},
};

/// Update Product Request
///
/// Replaces the name, price and stock of an existing product.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    /// Display name
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Units available to sell
    pub stock: u32,
}

impl UpdateProductRequest {
    fn into_update(self) -> Result<ProductUpdate, StatusError> {
        Ok(ProductUpdate {
            name: self.name,
            price: money::from_json(self.price)?,
            stock: self.stock,
        })
    }
}

/// Update Product Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<u64>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let product = ProductId::new(product.into_inner());

    tracing::Span::current().record("product_id", product.into_u64());

    let updated = state
        .app
        .products
        .update_product(product, json.into_inner().into_update()?)
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use bazaar_app::domain::products::{MockProductsService, ProductsServiceError, models::Product};

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{product}").put(handler))
    }

    #[tokio::test]
    async fn test_update_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .withf(|id, update| {
                *id == ProductId::new(1)
                    && *update
                        == ProductUpdate {
                            name: "Gaming Laptop".to_owned(),
                            price: Decimal::new(999_00, 2),
                            stock: 8,
                        }
            })
            .return_once(|id, update| {
                Ok(Product {
                    id,
                    name: update.name,
                    price: update.price,
                    stock: update.stock,
                })
            });

        let mut res = TestClient::put("http://example.com/products/1")
            .json(&json!({ "name": "Gaming Laptop", "price": 999.0, "stock": 8 }))
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 1);
        assert_eq!(body.stock, 8);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_404() {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::put("http://example.com/products/404")
            .json(&json!({ "name": "Ghost", "price": 1.0, "stock": 1 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_update_negative_stock_returns_400() {
        let mut products = MockProductsService::new();

        products.expect_update_product().never();

        let res = TestClient::put("http://example.com/products/1")
            .json(&json!({ "name": "Gaming Laptop", "price": 1200.0, "stock": -1 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
