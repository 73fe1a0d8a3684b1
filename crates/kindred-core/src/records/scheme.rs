//! Support schemes.
//!
//! Schemes are a curated directory shipped with the client rather than a
//! remote table; the list changes with releases, not at runtime.

use serde::{Deserialize, Serialize};

use super::ContentRecord;
use crate::query::matches_search;
use crate::types::RecordId;

/// A grant, loan, or support program relevant to the community.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scheme {
    pub id: RecordId,
    pub name: String,
    pub eligibility: String,
    pub benefit: String,
    pub category: String,
    pub link: String,
}

impl Scheme {
    /// The built-in scheme directory.
    pub fn builtin() -> Vec<Scheme> {
        fn scheme(
            id: &str,
            name: &str,
            eligibility: &str,
            benefit: &str,
            category: &str,
            link: &str,
        ) -> Scheme {
            Scheme {
                id: RecordId::new(id).expect("builtin scheme id"),
                name: name.to_string(),
                eligibility: eligibility.to_string(),
                benefit: benefit.to_string(),
                category: category.to_string(),
                link: link.to_string(),
            }
        }

        vec![
            scheme(
                "s1",
                "Community Founders Grant",
                "Any aspiring or early-stage founder in the community.",
                "Seed funding plus access to mentorship and market linkages.",
                "Financial",
                "https://example.org/founders-grant",
            ),
            scheme(
                "s2",
                "Micro-Enterprise Loan Program",
                "Members seeking loans for micro-enterprises.",
                "Collateral-free loans for equipment and working capital.",
                "Financial",
                "https://example.org/micro-loans",
            ),
            scheme(
                "s3",
                "Skills Accelerator",
                "Members transitioning into technical careers.",
                "Subsidized training and certification vouchers.",
                "Education",
                "https://example.org/skills-accelerator",
            ),
            scheme(
                "s4",
                "Mentor Match Fund",
                "Mentees paired through the community directory.",
                "Stipends covering a six-month structured mentorship.",
                "Mentorship",
                "https://example.org/mentor-match",
            ),
        ]
    }
}

impl ContentRecord for Scheme {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Search and category filters for the scheme directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemeQuery {
    /// Free-text term matched against name, eligibility, and benefit.
    pub search: String,
    /// Exact category filter; `None` matches everything.
    pub category: Option<String>,
}

impl SchemeQuery {
    /// Whether a single scheme passes every active filter.
    pub fn matches(&self, scheme: &Scheme) -> bool {
        let matches_search = matches_search(
            &self.search,
            &[&scheme.name, &scheme.eligibility, &scheme.benefit],
        );

        let matches_category = match &self.category {
            Some(category) => &scheme.category == category,
            None => true,
        };

        matches_search && matches_category
    }

    /// Filter the scheme directory, preserving curated order.
    pub fn apply(&self, schemes: &[Scheme]) -> Vec<Scheme> {
        schemes
            .iter()
            .filter(|scheme| self.matches(scheme))
            .cloned()
            .collect()
    }
}
