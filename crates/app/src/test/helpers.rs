//! Test Helpers

use crate::{
    domain::{
        carts::{
            CartsService, CartsServiceError,
            models::{Cart, CartId, NewCartItem},
        },
        products::models::ProductId,
    },
    test::TestContext,
};

pub(crate) async fn add_item(
    ctx: &TestContext,
    cart: CartId,
    product: u64,
    quantity: u32,
) -> Result<Cart, CartsServiceError> {
    ctx.carts
        .add_item(
            cart,
            NewCartItem {
                product_id: ProductId::new(product),
                quantity,
            },
        )
        .await
}
