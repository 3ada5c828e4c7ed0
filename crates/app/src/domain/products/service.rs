//! Products service.

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;

use crate::{
    domain::{
        carts::repositories::CartsRepository,
        products::{
            errors::ProductsServiceError,
            models::{NewProduct, Product, ProductId, ProductUpdate},
            repository::ProductsRepository,
        },
    },
    store::Store,
};

#[derive(Debug, Clone)]
pub struct StoreProductsService {
    store: Store,
    repository: ProductsRepository,
    carts_repository: CartsRepository,
}

impl StoreProductsService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            repository: ProductsRepository::new(),
            carts_repository: CartsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for StoreProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let tx = self.store.begin().await;

        Ok(self.repository.list_products(&tx))
    }

    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError> {
        let tx = self.store.begin().await;

        Ok(self.repository.get_product(&tx, product)?)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        if product.price < Decimal::ZERO {
            return Err(ProductsServiceError::InvalidPrice);
        }

        let mut tx = self.store.begin().await;

        let created = self.repository.create_product(&mut tx, product)?;

        tx.commit();

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        if update.price < Decimal::ZERO {
            return Err(ProductsServiceError::InvalidPrice);
        }

        let mut tx = self.store.begin().await;

        let updated = self.repository.update_product(&mut tx, product, update)?;

        // Cart totals are priced from the catalog, so they move with it.
        self.carts_repository.refresh_totals(&mut tx)?;

        tx.commit();

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in insertion order.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError>;

    /// Adds a new product under its caller-assigned id.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Replaces the stored record of an existing product.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;
}
