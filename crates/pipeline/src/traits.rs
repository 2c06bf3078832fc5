//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to record sets.

use catalog::MovieRecord;

/// Core trait for filtering movie records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
/// Filters take ownership of the records and return the ones they keep, in
/// their original order. A filter never fails: a record it can't judge is
/// a record it drops.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of records.
    fn apply(&self, records: Vec<MovieRecord>) -> Vec<MovieRecord>;
}
