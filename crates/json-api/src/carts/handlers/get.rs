//! Get Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use bazaar_app::domain::carts::models::CartId;

use crate::{
    carts::{errors::into_status_error, handlers::CartResponse},
    extensions::*,
};

/// Get Cart Handler
///
/// Returns a cart with its current total.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart found"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let cart = state
        .app
        .carts
        .get_cart(CartId::new(cart.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use bazaar_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::{carts::handlers::tests::make_cart, test_helpers::carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("carts/{cart}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .withf(|id| *id == CartId::new(1))
            .return_once(|_| Ok(make_cart(1)));

        let mut res = TestClient::get("http://example.com/carts/1")
            .send(&make_service(carts))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({ "id": 1, "items": [{ "product_id": 3, "quantity": 2 }], "total": 91.0 })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_cart_returns_404() {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        let res = TestClient::get("http://example.com/carts/99")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
