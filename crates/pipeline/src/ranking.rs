//! Final ordering of displayed results.

use std::cmp::Ordering;

use catalog::MovieRecord;

/// Sort by popularity, most popular first, and keep at most `limit` records.
///
/// The sort is stable, so records with equal popularity keep their merge
/// order. A NaN popularity compares equal to everything.
pub fn rank_by_popularity(mut records: Vec<MovieRecord>, limit: usize) -> Vec<MovieRecord> {
    records.sort_by(|a, b| {
        b.popularity
            .partial_cmp(&a.popularity)
            .unwrap_or(Ordering::Equal)
    });
    records.truncate(limit);
    records
}

/// Keep at most `limit` records without reordering (used for the fallback list).
pub fn truncate_in_order(mut records: Vec<MovieRecord>, limit: usize) -> Vec<MovieRecord> {
    records.truncate(limit);
    records
}
