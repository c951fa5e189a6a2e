//! Product record

use serde::{Deserialize, Serialize};

use crate::kind::EntityKind;
use crate::model::{Brand, Category};
use crate::record::Entity;
use crate::validation::{ValidationErrors, Validator};

/// Sellable product
///
/// Category and brand are embedded as the API returns them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
}

impl Product {
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            active: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn in_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn with_brand(mut self, brand: Brand) -> Self {
        self.brand = Some(brand);
        self
    }
}

impl Entity for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("name", &self.name, "Informe o nome do produto")
            .check(
                "price",
                self.price.is_finite() && self.price > 0.0,
                "Informe um preço maior que zero",
            )
            .check(
                "category",
                self.category.as_ref().and_then(|c| c.id.as_ref()).is_some(),
                "Selecione uma categoria",
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_requires_price_and_category() {
        let errors = Product::new("Cola", 0.0).validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.field("price").is_some());
        assert!(errors.field("category").is_some());
    }

    #[test]
    fn valid_product_passes() {
        let product =
            Product::new("Cola", 7.5).in_category(Category::named("Bebidas").with_id("1"));
        assert!(product.validate().is_ok());
    }

    #[test]
    fn nested_references_serialize() {
        let product = Product::new("Cola", 7.5)
            .in_category(Category::named("Bebidas").with_id("1"))
            .with_brand(Brand::named("Acme").with_id("3"));
        let json = product.to_value();
        assert_eq!(json["category"]["name"], "Bebidas");
        assert_eq!(json["brand"]["id"], "3");
        assert!(json.get("id").is_none());
    }
}
