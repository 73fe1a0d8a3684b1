//! Core content types.
//!
//! These types enforce invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod api_url;
mod record_id;
mod timestamp;

pub use api_url::ApiUrl;
pub use record_id::RecordId;
pub use timestamp::Timestamp;
