//! Subcommand implementations.

pub mod community;
pub mod guides;
pub mod showcase;
pub mod stories;

use crate::output;

/// Degrade a failed collection fetch to an empty collection.
///
/// List views stay usable when the remote source is down: the failure is
/// reported once on stderr and the view renders whatever else it has.
pub fn fetch_or_empty<T>(result: kindred_core::Result<Vec<T>>, what: &str) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, what, "Fetch failed, rendering empty collection");
            output::error(&format!("Could not fetch {}: {}", what, e));
            Vec::new()
        }
    }
}
