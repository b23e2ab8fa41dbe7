use rust_decimal::Decimal;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::str::FromStr;
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{ProductError, ProductResult};

/// Prices must fit the `NUMERIC(10,2)` column: two decimal places, eight integer digits
fn validate_price(price: &Decimal) -> Result<(), validator::ValidationError> {
    if price.normalize().scale() > 2 {
        return Err(validator::ValidationError::new("price_scale")
            .with_message("price must have at most two decimal places".into()));
    }
    if price.abs() >= Decimal::new(100_000_000, 0) {
        return Err(validator::ValidationError::new("price_range")
            .with_message("price must be below 100000000".into()));
    }
    Ok(())
}

/// Catalog categories
///
/// Wire and database representation is the upper-case variant name. Parsing
/// through `FromStr` ignores case so query strings like `?category=food` map
/// to [`Category::Food`]; JSON bodies must use the exact name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "category")]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Category {
    #[default]
    #[sea_orm(string_value = "UNKNOWN")]
    Unknown,
    #[sea_orm(string_value = "CLOTHS")]
    Cloths,
    #[sea_orm(string_value = "FOOD")]
    Food,
    #[sea_orm(string_value = "HOUSEWARES")]
    Housewares,
    #[sea_orm(string_value = "AUTOMOTIVE")]
    Automotive,
    #[sea_orm(string_value = "TOOLS")]
    Tools,
}

/// Product entity - a single catalog item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    /// Store-assigned identifier, null until the product is created
    pub id: Option<i32>,
    /// Product name
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Product description
    #[validate(length(max = 250))]
    pub description: String,
    /// Exact decimal price, serialized as a string
    #[schema(value_type = String, example = "12.50")]
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    /// Whether the product can be ordered
    pub available: bool,
    /// Catalog category
    pub category: Category,
}

/// Fields accepted from a JSON body. `id` is never taken from the body.
#[derive(Deserialize)]
struct ProductPayload {
    name: String,
    description: String,
    price: Decimal,
    available: bool,
    category: Category,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        available: bool,
        category: Category,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            available,
            category,
        }
    }

    /// Build a new, unsaved product from a JSON body.
    pub fn from_json(data: &Value) -> ProductResult<Self> {
        let mut product = Self::default();
        product.update_from_json(data)?;
        Ok(product)
    }

    /// JSON representation with the category rendered by name.
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": self.price.to_string(),
            "available": self.available,
            "category": self.category.to_string(),
        })
    }

    /// Overwrite every attribute except `id` from a JSON object.
    ///
    /// Fails with [`ProductError::DataValidation`] when `data` is not an
    /// object, a field is missing, `available` is not a boolean, `category`
    /// is not a known name or `price` is not numeric. On failure the product
    /// is left untouched.
    pub fn update_from_json(&mut self, data: &Value) -> ProductResult<()> {
        let Some(fields) = data.as_object() else {
            return Err(ProductError::DataValidation(
                "Invalid product: body of request contained bad or no data".to_string(),
            ));
        };

        if let Some(available) = fields.get("available") {
            if !available.is_boolean() {
                return Err(ProductError::DataValidation(format!(
                    "Invalid type for boolean [available]: {}",
                    json_type_name(available)
                )));
            }
        }

        let payload = ProductPayload::deserialize(data)
            .map_err(|e| ProductError::DataValidation(format!("Invalid product: {}", e)))?;

        self.name = payload.name;
        self.description = payload.description;
        self.price = payload.price;
        self.available = payload.available;
        self.category = payload.category;
        Ok(())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse a boolean-like string (`true/false`, `yes/no`, `y/n`, `1/0`, `on/off`).
pub fn parse_availability(value: &str) -> ProductResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Ok(true),
        "false" | "no" | "n" | "0" | "off" => Ok(false),
        _ => Err(ProductError::DataValidation(format!(
            "Invalid value for availability: '{}'",
            value
        ))),
    }
}

/// Parse a numeric-like string into an exact decimal.
///
/// Surrounding whitespace and quotes are stripped, so `" \"12.50\" "` parses.
pub fn parse_price(value: &str) -> ProductResult<Decimal> {
    let cleaned = value.trim_matches(|c: char| c.is_whitespace() || c == '"' || c == '\'');

    Decimal::from_str(cleaned)
        .or_else(|_| Decimal::from_scientific(cleaned))
        .map_err(|_| ProductError::DataValidation(format!("Invalid value for price: '{}'", value)))
}

/// Query-string filters for listing products
///
/// At most one filter applies, in the order `name`, `category`, `available`.
/// Empty values count as absent.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Exact product name
    pub name: Option<String>,
    /// Category name, case-insensitive
    pub category: Option<String>,
    /// Boolean-like availability flag
    pub available: Option<String>,
}

/// The single lookup a [`ProductFilter`] resolves to
#[derive(Debug, Clone, PartialEq)]
pub enum ProductQuery {
    ByName(String),
    ByCategory(Category),
    ByAvailability(bool),
    All,
}

impl ProductFilter {
    pub fn into_query(self) -> ProductResult<ProductQuery> {
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());

        if let Some(name) = present(self.name) {
            return Ok(ProductQuery::ByName(name));
        }

        if let Some(category) = present(self.category) {
            let category = Category::from_str(&category).map_err(|_| {
                ProductError::DataValidation(format!("Invalid category: '{}'", category))
            })?;
            return Ok(ProductQuery::ByCategory(category));
        }

        if let Some(available) = present(self.available) {
            return Ok(ProductQuery::ByAvailability(parse_availability(&available)?));
        }

        Ok(ProductQuery::All)
    }
}
