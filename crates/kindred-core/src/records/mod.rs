//! Content record kinds and per-domain normalization.
//!
//! Every domain exposes a `from_row` mapping from a raw remote row into a
//! validated record, returning a [`Rejection`] with a reason when the row
//! fails the validity invariant. Rejected rows never reach a view.

mod business;
mod forum;
mod guide;
mod product;
mod profile;
mod raw;
mod scheme;
mod story;

pub use business::{Business, BusinessQuery};
pub use forum::{ForumReply, ForumTopic, TopicQuery};
pub use guide::{Guide, GuideQuery};
pub use product::{Product, ProductQuery};
pub use profile::{Availability, Profile, ProfileKind, ProfileQuery};
pub use scheme::{Scheme, SchemeQuery};
pub use story::{Story, StoryQuery};

use std::fmt;

use crate::types::RecordId;

/// The content domains served by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Story,
    Profile,
    ForumTopic,
    ForumReply,
    Business,
    Product,
    Guide,
    Scheme,
}

impl Domain {
    /// Returns the domain name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Story => "story",
            Domain::Profile => "profile",
            Domain::ForumTopic => "forum_topic",
            Domain::ForumReply => "forum_reply",
            Domain::Business => "business",
            Domain::Product => "product",
            Domain::Guide => "guide",
            Domain::Scheme => "scheme",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a raw row was excluded during normalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    /// The row is not a JSON object.
    #[error("row is not a JSON object")]
    NotAnObject,

    /// A domain-required field is absent.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A domain-required field is present but empty.
    #[error("required field '{0}' is empty")]
    EmptyField(&'static str),

    /// The creation timestamp does not parse.
    #[error("unparseable timestamp '{value}'")]
    BadTimestamp { value: String },
}

/// A row that failed the validity invariant for its domain.
///
/// Rejections are counted and logged by the fetch layer; they are never
/// surfaced to the end user and never crash a view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{domain} row rejected: {reason}")]
pub struct Rejection {
    /// The domain whose invariant failed.
    pub domain: Domain,
    /// The specific failure.
    pub reason: RejectReason,
}

/// Behavior shared by every record kind.
///
/// Record identity is the `id` field; the merge step in
/// [`merge_records`](crate::query::merge_records) relies on it.
pub trait ContentRecord {
    /// The record's identifier.
    fn id(&self) -> &RecordId;

    /// Returns true iff this record is owned by the local content store.
    fn is_owned(&self) -> bool {
        self.id().is_owned()
    }
}
