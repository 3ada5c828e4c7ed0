//! List Orders Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::OrderResponse},
};

/// List Orders Handler
///
/// Returns every order in creation order.
#[endpoint(tags("orders"), summary = "List Orders")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let orders = state
        .app
        .orders
        .list_orders()
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bazaar_app::domain::orders::MockOrdersService;

    use crate::{orders::handlers::tests::make_order, test_helpers::orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders").get(handler))
    }

    #[tokio::test]
    async fn test_list_orders_returns_orders_in_sequence() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .return_once(|| Ok(vec![make_order(1), make_order(2)]));

        let mut res = TestClient::get("http://example.com/orders")
            .send(&make_service(orders))
            .await;

        let body: Vec<OrderResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.iter().map(|order| order.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(
            body.first().map(|order| order.created_at.as_str()),
            Some("1970-01-01T00:00:00Z")
        );

        Ok(())
    }
}
