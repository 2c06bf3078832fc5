//! Filter to remove records without artwork.
//!
//! Results are rendered as poster cards, so a record without a poster path
//! has nothing to show.

use catalog::MovieRecord;

use crate::traits::Filter;

/// Keeps only records whose poster path is present and non-blank.
pub struct HasPosterFilter;

impl Filter for HasPosterFilter {
    fn name(&self) -> &str {
        "HasPosterFilter"
    }

    fn apply(&self, records: Vec<MovieRecord>) -> Vec<MovieRecord> {
        records
            .into_iter()
            .filter(|record| record.has_poster())
            .collect()
    }
}
