//! App Router

use salvo::Router;

use crate::{carts, orders, products};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler),
                ),
        )
        .push(
            Router::with_path("carts")
                .post(carts::create::handler)
                .push(
                    Router::with_path("{cart}")
                        .get(carts::get::handler)
                        .delete(carts::delete::handler)
                        .push(Router::with_path("items").post(carts::items::create::handler))
                        .push(
                            Router::with_path("checkout").post(carts::checkout::create::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .push(Router::with_path("{order}").get(orders::get::handler)),
        )
}
