//! kindred-core - Core content types and the reconciliation/query layer.

pub mod error;
pub mod query;
pub mod records;
pub mod types;
pub mod view;

pub use error::Error;
pub use query::{SortMode, facets, matches_search, merge_records};
pub use records::{
    Availability, Business, BusinessQuery, ContentRecord, Domain, ForumReply, ForumTopic, Guide,
    GuideQuery, Product, ProductQuery, Profile, ProfileKind, ProfileQuery, RejectReason, Rejection,
    Scheme, SchemeQuery, Story, StoryQuery, TopicQuery,
};
pub use types::{ApiUrl, RecordId, Timestamp};
pub use view::StoryView;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
