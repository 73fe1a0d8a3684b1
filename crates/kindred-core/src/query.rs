//! The reconciliation and query layer.
//!
//! Merging, deduplication, facet extraction, and the shared predicate
//! helpers used by the per-domain query types. Everything here is a pure
//! function of its inputs: identical inputs yield identical ordered output.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};
use crate::records::ContentRecord;

/// How a filtered result set is ordered.
///
/// A closed enumeration so comparator selection is exhaustively matched;
/// adding a mode is a compile-time-checked change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Descending by creation timestamp.
    #[default]
    Newest,
    /// Ascending by creation timestamp.
    Oldest,
    /// Descending by likes/reply count.
    Popular,
}

impl SortMode {
    /// Returns the mode name as used on the wire and the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::Popular => "popular",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortMode::Newest),
            "oldest" => Ok(SortMode::Oldest),
            "popular" => Ok(SortMode::Popular),
            other => Err(InvalidInputError::Other {
                message: format!(
                    "unknown sort mode '{}' (expected newest, oldest, or popular)",
                    other
                ),
            }
            .into()),
        }
    }
}

/// Merge local-store records with remote records, deduplicating by id.
///
/// Local records are merged ahead of remote records and the first
/// occurrence of an id wins, so a local record shadows a remote record
/// sharing its id. Relative order within each source is preserved.
pub fn merge_records<T: ContentRecord>(local: Vec<T>, remote: Vec<T>) -> Vec<T> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::with_capacity(local.len() + remote.len());

    for record in local.into_iter().chain(remote) {
        if seen.insert(record.id().as_str().to_string()) {
            merged.push(record);
        }
    }

    merged
}

/// Collect the distinct facet values from a record collection.
///
/// Values are trimmed, empty values dropped, and the result is sorted
/// lexicographically so the rendered filter options are deterministic.
pub fn facets<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let set: BTreeSet<String> = values
        .into_iter()
        .map(|v| v.as_ref().trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    set.into_iter().collect()
}

/// Case-insensitive substring match against a fixed list of fields.
///
/// A record matches if any field contains the term; an empty term matches
/// everything.
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}
