use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Category, Product};

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            price: model.price,
            available: model.available,
            category: model.category,
        }
    }
}

// An unsaved product leaves the key to the sequence
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            id: product.id.map_or(NotSet, Set),
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
            available: Set(product.available),
            category: Set(product.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Model {
        Model {
            id: 5,
            name: "Wrench".to_string(),
            description: "Adjustable".to_string(),
            price: Decimal::new(899, 2),
            available: true,
            category: Category::Tools,
        }
    }

    #[test]
    fn test_model_into_product_sets_id() {
        let product: Product = model().into();
        assert_eq!(product.id, Some(5));
        assert_eq!(product.name, "Wrench");
        assert_eq!(product.price, Decimal::new(899, 2));
        assert_eq!(product.category, Category::Tools);
    }

    #[test]
    fn test_unsaved_product_leaves_id_not_set() {
        let product = Product::new("Wrench", "Adjustable", Decimal::new(899, 2), true, Category::Tools);
        let active: ActiveModel = product.into();
        assert!(active.id.is_not_set());
        assert_eq!(active.name, Set("Wrench".to_string()));
    }

    #[test]
    fn test_saved_product_sets_id() {
        let product: Product = model().into();
        let active: ActiveModel = product.into();
        assert_eq!(active.id, Set(5));
    }
}
