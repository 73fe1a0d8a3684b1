//! Showcase products.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::raw::RawRow;
use super::{ContentRecord, Domain, Rejection};
use crate::query::matches_search;
use crate::types::{RecordId, Timestamp};

const IMAGE_PLACEHOLDER: &str = "/images/placeholder-product.svg";

/// A product offered through the showcase marketplace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image: String,

    /// Display price, kept as the seller entered it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Selling business name, flat or from a joined `businesses` select.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl Product {
    /// Normalize a raw remote row into a product.
    ///
    /// Only `id` is required; every other field takes a display default.
    pub fn from_row(row: &Value) -> Result<Self, Rejection> {
        let raw = RawRow::new(Domain::Product, row)?;

        let seller = raw
            .opt_str("seller")
            .or_else(|| raw.nested_str("businesses", "name"));

        Ok(Self {
            id: raw.id()?,
            name: raw.str_or("name", "Untitled Product"),
            description: raw.str_or("description", ""),
            category: raw.str_or("category", "General"),
            image: raw.str_or("image_url", IMAGE_PLACEHOLDER),
            price: raw.opt_str("price"),
            seller,
            created_at: raw.opt_timestamp("created_at"),
        })
    }
}

impl ContentRecord for Product {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Search and category filters for the product gallery.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    /// Free-text term matched against name and description.
    pub search: String,
    /// Exact category filter; `None` matches everything.
    pub category: Option<String>,
}

impl ProductQuery {
    /// Whether a single product passes every active filter.
    pub fn matches(&self, product: &Product) -> bool {
        let matches_search =
            matches_search(&self.search, &[&product.name, &product.description]);

        let matches_category = match &self.category {
            Some(category) => &product.category == category,
            None => true,
        };

        matches_search && matches_category
    }

    /// Filter a product collection, preserving source order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn seller_comes_from_joined_business() {
        let row = json!({
            "id": "p1",
            "name": "Empower Mug",
            "businesses": {"name": "EmpowerHer Designs"},
        });
        let product = Product::from_row(&row).unwrap();
        assert_eq!(product.seller.as_deref(), Some("EmpowerHer Designs"));
        assert_eq!(product.image, IMAGE_PLACEHOLDER);
    }

    #[test]
    fn null_price_is_none() {
        let row = json!({"id": "p1", "price": null});
        let product = Product::from_row(&row).unwrap();
        assert!(product.price.is_none());
        assert_eq!(product.name, "Untitled Product");
    }

    #[test]
    fn search_and_category_are_anded() {
        let rows = vec![
            json!({"id": "p1", "name": "Empower Mug", "category": "Home Goods"}),
            json!({"id": "p2", "name": "Empower Poster", "category": "Art"}),
        ];
        let products: Vec<Product> =
            rows.iter().map(|r| Product::from_row(r).unwrap()).collect();

        let query = ProductQuery {
            search: "empower".to_string(),
            category: Some("Art".to_string()),
        };
        let result = query.apply(&products);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "p2");
    }
}
