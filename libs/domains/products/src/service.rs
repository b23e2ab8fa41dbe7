use serde_json::Value;
use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFilter, ProductQuery, parse_availability, parse_price};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    fn validate(product: &Product) -> ProductResult<()> {
        product
            .validate()
            .map_err(|e| ProductError::DataValidation(format!("Invalid product: {}", e)))
    }

    /// Create a new product with validation
    pub async fn create_product(&self, product: Product) -> ProductResult<Product> {
        Self::validate(&product)?;
        self.repository.create(product).await
    }

    /// Create a product from a raw JSON body
    pub async fn create_product_from_json(&self, data: &Value) -> ProductResult<Product> {
        let product = Product::from_json(data)?;
        self.create_product(product).await
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List products, narrowed by at most one filter
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        match filter.into_query()? {
            ProductQuery::ByName(name) => self.repository.find_by_name(&name).await,
            ProductQuery::ByCategory(category) => {
                self.repository.find_by_category(category).await
            }
            ProductQuery::ByAvailability(available) => {
                self.repository.find_by_availability(available).await
            }
            ProductQuery::All => self.repository.all().await,
        }
    }

    /// Replace every attribute of an existing product from a JSON body
    ///
    /// The id in the path wins over any id in the body.
    pub async fn update_product(&self, id: i32, data: &Value) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;

        product.update_from_json(data)?;
        product.id = Some(id);
        Self::validate(&product)?;

        self.repository.update(product).await
    }

    /// Delete a product. Deleting an unknown id is not an error.
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            tracing::debug!(product_id = id, "Delete requested for missing product");
        }
        Ok(())
    }

    /// Products whose availability matches a boolean-like string
    pub async fn find_by_availability_str(&self, value: &str) -> ProductResult<Vec<Product>> {
        let available = parse_availability(value)?;
        self.repository.find_by_availability(available).await
    }

    /// Products priced exactly at a numeric-like string
    pub async fn find_by_price_str(&self, value: &str) -> ProductResult<Vec<Product>> {
        let price = parse_price(value)?;
        self.repository.find_by_price(price).await
    }
}
