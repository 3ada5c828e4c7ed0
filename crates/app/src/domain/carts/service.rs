//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::{
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, CartId, NewCart, NewCartItem},
            repositories::CartsRepository,
        },
        products::repository::ProductsRepository,
    },
    store::Store,
};

#[derive(Debug, Clone)]
pub struct StoreCartsService {
    store: Store,
    carts_repository: CartsRepository,
    products_repository: ProductsRepository,
}

impl StoreCartsService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            carts_repository: CartsRepository::new(),
            products_repository: ProductsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for StoreCartsService {
    async fn get_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError> {
        let tx = self.store.begin().await;

        Ok(self.carts_repository.get_cart(&tx, cart)?)
    }

    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError> {
        let mut tx = self.store.begin().await;

        let created = self.carts_repository.create_cart(&mut tx, cart.id)?;

        tx.commit();

        Ok(created)
    }

    async fn add_item(&self, cart: CartId, item: NewCartItem) -> Result<Cart, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.store.begin().await;

        let mut current = self.carts_repository.get_cart(&tx, cart)?;

        let product = self
            .products_repository
            .get_product(&tx, item.product_id)
            .map_err(CartsServiceError::from_product_lookup)?;

        if product.stock < item.quantity {
            warn!(
                cart = %cart,
                product = %product.id,
                requested = item.quantity,
                available = product.stock,
                "rejected cart item: insufficient stock"
            );

            return Err(CartsServiceError::InsufficientStock {
                product: product.name,
            });
        }

        current.merge_item(item.into())?;

        let saved = self.carts_repository.save_cart(&mut tx, current)?;

        tx.commit();

        Ok(saved)
    }

    async fn clear_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError> {
        let mut tx = self.store.begin().await;

        let cleared = self.carts_repository.clear_cart(&mut tx, cart)?;

        tx.commit();

        Ok(cleared)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve a single cart.
    async fn get_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError>;

    /// Provisions a new, empty cart under the given id.
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError>;

    /// Add an item to the given cart, merging it with any entry for the same product.
    async fn add_item(&self, cart: CartId, item: NewCartItem) -> Result<Cart, CartsServiceError>;

    /// Empties the given cart and zeroes its total.
    async fn clear_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::{
            carts::models::CartItem,
            pricing::round_money,
            products::{
                ProductsService,
                models::{NewProduct, ProductId},
            },
        },
        store::DEFAULT_CART_ID,
        test::{TestContext, helpers::add_item},
    };

    use super::*;

    fn line(product: u64, quantity: u32) -> CartItem {
        CartItem {
            product_id: ProductId::new(product),
            quantity,
        }
    }

    #[tokio::test]
    async fn default_cart_starts_empty() -> TestResult {
        let ctx = TestContext::new();

        let cart = ctx.carts.get_cart(DEFAULT_CART_ID).await?;

        assert!(cart.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);

        Ok(())
    }

    #[tokio::test]
    async fn get_cart_unknown_id_returns_not_found() {
        let ctx = TestContext::new();

        let result = ctx.carts.get_cart(CartId::new(99)).await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_cart_returns_empty_cart() -> TestResult {
        let ctx = TestContext::new();

        let cart = ctx
            .carts
            .create_cart(NewCart { id: CartId::new(2) })
            .await?;

        assert_eq!(cart, Cart::empty(CartId::new(2)));
        assert_eq!(ctx.carts.get_cart(CartId::new(2)).await?, cart);

        Ok(())
    }

    #[tokio::test]
    async fn create_cart_duplicate_id_returns_already_exists() {
        let ctx = TestContext::new();

        let result = ctx.carts.create_cart(NewCart { id: DEFAULT_CART_ID }).await;

        assert!(
            matches!(result, Err(CartsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );
    }

    #[tokio::test]
    async fn adding_item_prices_cart() -> TestResult {
        let ctx = TestContext::new();

        let cart = add_item(&ctx, DEFAULT_CART_ID, 2, 1).await?;

        assert_eq!(cart.items, vec![line(2, 1)]);
        assert_eq!(cart.total, Decimal::new(150_00, 2));

        Ok(())
    }

    #[tokio::test]
    async fn adding_same_product_twice_merges_into_one_entry() -> TestResult {
        let ctx = TestContext::new();

        add_item(&ctx, DEFAULT_CART_ID, 3, 2).await?;
        add_item(&ctx, DEFAULT_CART_ID, 1, 1).await?;

        let cart = add_item(&ctx, DEFAULT_CART_ID, 3, 5).await?;

        assert_eq!(cart.items, vec![line(3, 7), line(1, 1)]);
        assert_eq!(cart.total, Decimal::new(1_518_50, 2));

        Ok(())
    }

    #[tokio::test]
    async fn total_tracks_every_add() -> TestResult {
        let ctx = TestContext::new();

        for (product, quantity) in [(1, 1), (3, 3), (2, 2), (3, 1)] {
            let cart = add_item(&ctx, DEFAULT_CART_ID, product, quantity).await?;

            let mut expected = Decimal::ZERO;

            for item in &cart.items {
                let product = ctx.products.get_product(item.product_id).await?;

                expected += product.price * Decimal::from(item.quantity);
            }

            assert_eq!(cart.total, round_money(expected));
        }

        Ok(())
    }

    #[tokio::test]
    async fn adding_more_than_stock_returns_insufficient_stock() -> TestResult {
        let ctx = TestContext::new();

        let result = add_item(&ctx, DEFAULT_CART_ID, 1, 11).await;

        assert!(
            matches!(
                &result,
                Err(CartsServiceError::InsufficientStock { product }) if product == "Gaming Laptop"
            ),
            "expected InsufficientStock naming the laptop, got {result:?}"
        );

        let cart = ctx.carts.get_cart(DEFAULT_CART_ID).await?;
        let laptop = ctx.products.get_product(ProductId::new(1)).await?;

        assert!(cart.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);
        assert_eq!(laptop.stock, 10);

        Ok(())
    }

    #[tokio::test]
    async fn merged_quantity_overflow_returns_invalid_quantity() -> TestResult {
        let ctx = TestContext::new();

        ctx.products
            .create_product(NewProduct {
                id: ProductId::new(9),
                name: "Sticker".to_string(),
                price: Decimal::new(1, 2),
                stock: u32::MAX,
            })
            .await?;

        add_item(&ctx, DEFAULT_CART_ID, 9, u32::MAX).await?;

        let result = add_item(&ctx, DEFAULT_CART_ID, 9, 5).await;

        assert!(
            matches!(result, Err(CartsServiceError::InvalidQuantity)),
            "expected InvalidQuantity, got {result:?}"
        );
        assert_eq!(
            ctx.carts.get_cart(DEFAULT_CART_ID).await?.items,
            vec![line(9, u32::MAX)]
        );

        Ok(())
    }

    #[tokio::test]
    async fn adding_zero_quantity_returns_invalid_quantity() {
        let ctx = TestContext::new();

        let result = add_item(&ctx, DEFAULT_CART_ID, 1, 0).await;

        assert!(
            matches!(result, Err(CartsServiceError::InvalidQuantity)),
            "expected InvalidQuantity, got {result:?}"
        );
    }

    #[tokio::test]
    async fn adding_unknown_product_returns_product_not_found() {
        let ctx = TestContext::new();

        let result = add_item(&ctx, DEFAULT_CART_ID, 404, 1).await;

        assert!(
            matches!(result, Err(CartsServiceError::ProductNotFound)),
            "expected ProductNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn adding_to_unknown_cart_returns_not_found() {
        let ctx = TestContext::new();

        let result = add_item(&ctx, CartId::new(99), 1, 1).await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn clear_cart_resets_items_and_total() -> TestResult {
        let ctx = TestContext::new();

        add_item(&ctx, DEFAULT_CART_ID, 2, 3).await?;

        let cleared = ctx.carts.clear_cart(DEFAULT_CART_ID).await?;

        assert!(cleared.is_empty());
        assert_eq!(cleared.total, Decimal::ZERO);
        assert_eq!(ctx.carts.get_cart(DEFAULT_CART_ID).await?, cleared);

        Ok(())
    }

    #[tokio::test]
    async fn clear_cart_unknown_id_returns_not_found() {
        let ctx = TestContext::new();

        let result = ctx.carts.clear_cart(CartId::new(99)).await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
