use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Category, Product};

/// Repository trait for Product persistence
///
/// List operations return products ordered by id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product; any id already on it is ignored and a new one assigned
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// Get a product by ID
    async fn find(&self, id: i32) -> ProductResult<Option<Product>>;

    /// All stored products
    async fn all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>>;

    async fn find_by_category(&self, category: Category) -> ProductResult<Vec<Product>>;

    async fn find_by_availability(&self, available: bool) -> ProductResult<Vec<Product>>;

    async fn find_by_price(&self, price: Decimal) -> ProductResult<Vec<Product>>;

    /// Persist every field of an existing product
    ///
    /// Fails with a validation error when the product has no id and with
    /// not-found when the row no longer exists.
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Delete a product by ID, returning whether a row was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

pub(crate) fn missing_id() -> ProductError {
    ProductError::DataValidation("Update called with empty ID field".to_string())
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i32, Product>>>,
    last_id: Arc<AtomicI32>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn select(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Product> {
        let products = self.products.read().await;
        products.values().filter(|p| predicate(p)).cloned().collect()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, mut product: Product) -> ProductResult<Product> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        product.id = Some(id);

        self.products.write().await.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn find(&self, id: i32) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.select(|_| true).await)
    }

    async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>> {
        Ok(self.select(|p| p.name == name).await)
    }

    async fn find_by_category(&self, category: Category) -> ProductResult<Vec<Product>> {
        Ok(self.select(|p| p.category == category).await)
    }

    async fn find_by_availability(&self, available: bool) -> ProductResult<Vec<Product>> {
        Ok(self.select(|p| p.available == available).await)
    }

    async fn find_by_price(&self, price: Decimal) -> ProductResult<Vec<Product>> {
        Ok(self.select(|p| p.price == price).await)
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let id = product.id.ok_or_else(missing_id)?;
        let mut products = self.products.write().await;

        let stored = products.get_mut(&id).ok_or(ProductError::NotFound(id))?;
        *stored = product.clone();

        tracing::info!(product_id = id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
