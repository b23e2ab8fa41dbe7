use async_trait::async_trait;
use database::BaseRepository;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Category, Product},
    repository::{ProductRepository, missing_id},
};

pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    async fn fetch(&self, query: Select<entity::Entity>) -> ProductResult<Vec<Product>> {
        let models = query
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, mut product: Product) -> ProductResult<Product> {
        product.id = None;
        let active_model: entity::ActiveModel = product.into();

        let model = self.base.insert(active_model).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn find(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Product::from))
    }

    async fn all(&self) -> ProductResult<Vec<Product>> {
        self.fetch(entity::Entity::find()).await
    }

    async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>> {
        self.fetch(entity::Entity::find().filter(entity::Column::Name.eq(name)))
            .await
    }

    async fn find_by_category(&self, category: Category) -> ProductResult<Vec<Product>> {
        self.fetch(entity::Entity::find().filter(entity::Column::Category.eq(category)))
            .await
    }

    async fn find_by_availability(&self, available: bool) -> ProductResult<Vec<Product>> {
        self.fetch(entity::Entity::find().filter(entity::Column::Available.eq(available)))
            .await
    }

    async fn find_by_price(&self, price: Decimal) -> ProductResult<Vec<Product>> {
        self.fetch(entity::Entity::find().filter(entity::Column::Price.eq(price)))
            .await
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let id = product.id.ok_or_else(missing_id)?;
        let active_model: entity::ActiveModel = product.into();

        let model = self.base.update(active_model).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ProductError::NotFound(id),
            other => other.into(),
        })?;

        tracing::info!(product_id = id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, name: &str) -> entity::Model {
        entity::Model {
            id,
            name: name.to_string(),
            description: "From the mock".to_string(),
            price: Decimal::new(1250, 2),
            available: true,
            category: Category::Cloths,
        }
    }

    #[tokio::test]
    async fn test_create_returns_stored_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Fedora")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let mut input = Product::new("Fedora", "From the mock", Decimal::new(1250, 2), true, Category::Cloths);
        input.id = Some(77);

        let created = repo.create(input).await.unwrap();
        assert_eq!(created.id, Some(1));
        assert_eq!(created.name, "Fedora");
    }

    #[tokio::test]
    async fn test_find_maps_missing_row_to_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, "Bowler")]])
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert_eq!(repo.find(3).await.unwrap().unwrap().name, "Bowler");
        assert!(repo.find(4).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_category_returns_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Fedora"), model(2, "Bowler")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let products = repo.find_by_category(Category::Cloths).await.unwrap();
        let ids: Vec<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
        assert!(products.iter().all(|p| p.category == Category::Cloths));
    }

    #[tokio::test]
    async fn test_update_without_id_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = PgProductRepository::new(db);

        let product = Product::new("Fedora", "", Decimal::ONE, true, Category::Cloths);
        assert!(matches!(
            repo.update(product).await,
            Err(ProductError::DataValidation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_missing_row_returns_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let mut product: Product = model(9, "Fedora").into();
        product.name = "Bowler".to_string();

        assert!(matches!(
            repo.update(product).await,
            Err(ProductError::NotFound(9))
        ));
    }

    #[tokio::test]
    async fn test_delete_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
    }
}
