//! Resource guides.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::raw::RawRow;
use super::{ContentRecord, Domain, Rejection};
use crate::query::matches_search;
use crate::types::RecordId;

const IMAGE_PLACEHOLDER: &str = "/images/placeholder-guide.svg";

/// A long-form how-to guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guide {
    pub id: RecordId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub image: String,

    /// Estimated reading time in minutes.
    #[serde(default)]
    pub read_time: u32,
}

impl Guide {
    /// Normalize a raw remote row into a guide.
    ///
    /// `id` and `title` are required; everything else takes a display
    /// default.
    pub fn from_row(row: &Value) -> Result<Self, Rejection> {
        let raw = RawRow::new(Domain::Guide, row)?;

        Ok(Self {
            id: raw.id()?,
            title: raw.required_str("title")?,
            excerpt: raw.str_or("excerpt", ""),
            content: raw.str_or("content", ""),
            category: raw.str_or("category", "General"),
            image: raw.str_or("image", IMAGE_PLACEHOLDER),
            read_time: raw.count("read_time"),
        })
    }
}

impl ContentRecord for Guide {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Search and category filters for the guide library.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuideQuery {
    /// Free-text term matched against title, excerpt, and content.
    pub search: String,
    /// Exact category filter; `None` matches everything.
    pub category: Option<String>,
}

impl GuideQuery {
    /// Whether a single guide passes every active filter.
    pub fn matches(&self, guide: &Guide) -> bool {
        let matches_search = matches_search(
            &self.search,
            &[&guide.title, &guide.excerpt, &guide.content],
        );

        let matches_category = match &self.category {
            Some(category) => &guide.category == category,
            None => true,
        };

        matches_search && matches_category
    }

    /// Filter a guide collection, preserving source order.
    pub fn apply(&self, guides: &[Guide]) -> Vec<Guide> {
        guides
            .iter()
            .filter(|guide| self.matches(guide))
            .cloned()
            .collect()
    }
}
