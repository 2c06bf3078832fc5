//! Filter to remove records flagged as adult content.
//!
//! Discovery requests already ask the catalog to exclude adult titles, but
//! free-text search does not, so the flag is checked again here.

use catalog::MovieRecord;

use crate::traits::Filter;

pub struct AdultContentFilter;

impl Filter for AdultContentFilter {
    fn name(&self) -> &str {
        "AdultContentFilter"
    }

    fn apply(&self, records: Vec<MovieRecord>) -> Vec<MovieRecord> {
        records.into_iter().filter(|record| !record.adult).collect()
    }
}
