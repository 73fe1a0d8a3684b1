//! Showcase businesses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::raw::RawRow;
use super::{ContentRecord, Domain, Rejection};
use crate::query::matches_search;
use crate::types::RecordId;

const LOGO_PLACEHOLDER: &str = "/images/placeholder-business.svg";

/// A community-owned business listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: RecordId,
    pub name: String,
    pub owner: String,
    pub description: String,
    pub category: String,
    pub logo: String,
    pub contact: String,
}

impl Business {
    /// Normalize a raw remote row into a business listing.
    ///
    /// Only `id` is required; every other field takes a display default.
    pub fn from_row(row: &Value) -> Result<Self, Rejection> {
        let raw = RawRow::new(Domain::Business, row)?;

        Ok(Self {
            id: raw.id()?,
            name: raw.str_or("name", "Untitled Business"),
            owner: raw.str_or("owner", "Unknown"),
            description: raw.str_or("description", ""),
            category: raw.str_or("category", "General"),
            logo: raw.str_or("logo", LOGO_PLACEHOLDER),
            contact: raw.str_or("contact", ""),
        })
    }
}

impl ContentRecord for Business {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Search and category filters for the business showcase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessQuery {
    /// Free-text term matched against name, owner, and description.
    pub search: String,
    /// Exact category filter; `None` matches everything.
    pub category: Option<String>,
}

impl BusinessQuery {
    /// Whether a single listing passes every active filter.
    pub fn matches(&self, business: &Business) -> bool {
        let matches_search = matches_search(
            &self.search,
            &[&business.name, &business.owner, &business.description],
        );

        let matches_category = match &self.category {
            Some(category) => &business.category == category,
            None => true,
        };

        matches_search && matches_category
    }

    /// Filter a business collection, preserving source order.
    pub fn apply(&self, businesses: &[Business]) -> Vec<Business> {
        businesses
            .iter()
            .filter(|business| self.matches(business))
            .cloned()
            .collect()
    }
}
