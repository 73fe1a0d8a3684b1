//! Memoized story view state.

use crate::query::{facets, merge_records};
use crate::records::{Story, StoryQuery};

/// The merged, filterable story collection behind the stories view.
///
/// Holds the reconciled collection together with the active query, and
/// caches the derived result set and tag facets. Both are pure functions
/// of (collection, query), so the caches are dropped only when an input
/// changes; there is no cross-view cache or invalidation protocol.
#[derive(Debug, Clone)]
pub struct StoryView {
    records: Vec<Story>,
    query: StoryQuery,
    results: Option<Vec<Story>>,
    tags: Option<Vec<String>>,
}

impl StoryView {
    /// Build a view over local and remote stories.
    ///
    /// Both collections are expected to be already normalized; they are
    /// merged local-first and deduplicated by id.
    pub fn new(local: Vec<Story>, remote: Vec<Story>) -> Self {
        Self {
            records: merge_records(local, remote),
            query: StoryQuery::default(),
            results: None,
            tags: None,
        }
    }

    /// The merged collection before filtering.
    pub fn records(&self) -> &[Story] {
        &self.records
    }

    /// The active query.
    pub fn query(&self) -> &StoryQuery {
        &self.query
    }

    /// Replace the active query, invalidating the cached result set.
    pub fn set_query(&mut self, query: StoryQuery) {
        if self.query != query {
            self.query = query;
            self.results = None;
        }
    }

    /// The filtered and sorted result set, computed on first access.
    pub fn results(&mut self) -> &[Story] {
        if self.results.is_none() {
            self.results = Some(self.query.apply(&self.records));
        }
        self.results.as_deref().unwrap_or_default()
    }

    /// The distinct tags across the merged collection, sorted, computed on
    /// first access. Independent of the active query.
    pub fn tags(&mut self) -> &[String] {
        if self.tags.is_none() {
            self.tags = Some(facets(
                self.records.iter().flat_map(|story| story.tags.iter()),
            ));
        }
        self.tags.as_deref().unwrap_or_default()
    }
}
