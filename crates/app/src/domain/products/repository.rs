//! Products Repository

use crate::{
    domain::products::models::{NewProduct, Product, ProductId, ProductUpdate},
    store::{StoreError, Transaction},
};

#[derive(Debug, Clone, Default)]
pub(crate) struct ProductsRepository;

impl ProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn list_products(&self, tx: &Transaction) -> Vec<Product> {
        tx.inventory().products.clone()
    }

    pub(crate) fn get_product(
        &self,
        tx: &Transaction,
        product: ProductId,
    ) -> Result<Product, StoreError> {
        tx.inventory()
            .products
            .iter()
            .find(|candidate| candidate.id == product)
            .cloned()
            .ok_or(StoreError::RowNotFound)
    }

    pub(crate) fn create_product(
        &self,
        tx: &mut Transaction,
        product: NewProduct,
    ) -> Result<Product, StoreError> {
        let products = &mut tx.inventory_mut().products;

        if products.iter().any(|existing| existing.id == product.id) {
            return Err(StoreError::UniqueViolation);
        }

        let created = Product::from(product);

        products.push(created.clone());

        Ok(created)
    }

    pub(crate) fn update_product(
        &self,
        tx: &mut Transaction,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, StoreError> {
        let updated = Product {
            id: product,
            name: update.name,
            price: update.price,
            stock: update.stock,
        };

        self.replace_product(tx, updated.clone())?;

        Ok(updated)
    }

    /// Remove `delta` units from a product's stock.
    ///
    /// Callers validate availability first; a delta larger than the stock is rejected
    /// rather than wrapped.
    pub(crate) fn adjust_stock(
        &self,
        tx: &mut Transaction,
        product: ProductId,
        delta: u32,
    ) -> Result<Product, StoreError> {
        let current = self.get_product(tx, product)?;

        let stock = current
            .stock
            .checked_sub(delta)
            .ok_or(StoreError::CheckViolation)?;

        let adjusted = current.with_stock(stock);

        self.replace_product(tx, adjusted.clone())?;

        Ok(adjusted)
    }

    fn replace_product(&self, tx: &mut Transaction, product: Product) -> Result<(), StoreError> {
        let slot = tx
            .inventory_mut()
            .products
            .iter_mut()
            .find(|existing| existing.id == product.id)
            .ok_or(StoreError::RowNotFound)?;

        *slot = product;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::store::Store;

    use super::*;

    fn new_product(id: u64, stock: u32) -> NewProduct {
        NewProduct {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Decimal::new(9_99, 2),
            stock,
        }
    }

    #[tokio::test]
    async fn adjust_stock_subtracts_delta() -> TestResult {
        let store = Store::new();
        let repository = ProductsRepository::new();
        let mut tx = store.begin().await;

        repository.create_product(&mut tx, new_product(1, 10))?;

        let adjusted = repository.adjust_stock(&mut tx, ProductId::new(1), 4)?;

        assert_eq!(adjusted.stock, 6);
        assert_eq!(repository.get_product(&tx, ProductId::new(1))?.stock, 6);

        Ok(())
    }

    #[tokio::test]
    async fn adjust_stock_unknown_product_returns_not_found() {
        let store = Store::new();
        let repository = ProductsRepository::new();
        let mut tx = store.begin().await;

        let result = repository.adjust_stock(&mut tx, ProductId::new(42), 1);

        assert_eq!(result, Err(StoreError::RowNotFound));
    }

    #[tokio::test]
    async fn adjust_stock_below_zero_is_rejected() -> TestResult {
        let store = Store::new();
        let repository = ProductsRepository::new();
        let mut tx = store.begin().await;

        repository.create_product(&mut tx, new_product(1, 2))?;

        let result = repository.adjust_stock(&mut tx, ProductId::new(1), 3);

        assert_eq!(result, Err(StoreError::CheckViolation));
        assert_eq!(repository.get_product(&tx, ProductId::new(1))?.stock, 2);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_rejects_duplicate_id() -> TestResult {
        let store = Store::new();
        let repository = ProductsRepository::new();
        let mut tx = store.begin().await;

        repository.create_product(&mut tx, new_product(1, 2))?;

        let result = repository.create_product(&mut tx, new_product(1, 5));

        assert_eq!(result, Err(StoreError::UniqueViolation));
        assert_eq!(repository.list_products(&tx).len(), 1);

        Ok(())
    }
}
