//! Shared types for the lookup sources.

use catalog::{CatalogError, MovieRecord};
use tracing::warn;

/// Which lookup produced a set of records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupSource {
    /// Free-text title search
    TextSearch,
    /// Per-term keyword resolution + discovery
    KeywordDiscovery,
    /// Genre-filtered discovery
    GenreDiscovery,
    /// Hardcoded list of well-known titles
    Fallback,
}

/// Records returned by one lookup, tagged with where they came from
#[derive(Debug, Clone)]
pub struct LookupResult {
    pub source: LookupSource,
    pub records: Vec<MovieRecord>,
}

impl LookupResult {
    pub fn new(source: LookupSource, records: Vec<MovieRecord>) -> Self {
        Self { source, records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Collapse a failed catalog call into an empty contribution
pub(crate) fn or_empty<T>(
    source: LookupSource,
    what: &str,
    result: Result<Vec<T>, CatalogError>,
) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            warn!("{:?} {} failed, contributing nothing: {}", source, what, e);
            Vec::new()
        }
    }
}
