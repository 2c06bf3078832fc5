//! Merging of per-source record lists.
//!
//! The same movie routinely comes back from several lookups (a title match
//! that is also tagged with the keyword). Lists are concatenated in the
//! order given and only the first record seen for each id is kept.

use std::collections::HashSet;

use catalog::MovieRecord;

/// Concatenate `lists` and drop every record whose id was already seen.
///
/// Relative order of the surviving records is preserved.
pub fn merge_unique<I>(lists: I) -> Vec<MovieRecord>
where
    I: IntoIterator<Item = Vec<MovieRecord>>,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for record in lists.into_iter().flatten() {
        if seen.insert(record.id) {
            merged.push(record);
        }
    }

    tracing::debug!("Merged into {} unique records", merged.len());
    merged
}
