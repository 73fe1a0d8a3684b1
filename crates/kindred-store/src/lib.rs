//! kindred-store - File-backed local content store.

mod store;

pub use store::{StoryDraft, StoryPatch, StoryStore};
