//! Fallback Source
//!
//! Last resort when every other lookup came back empty: fetch a fixed list
//! of well-known titles by id. Order of the list is preserved; ids the
//! catalog fails to return are skipped.

use std::sync::Arc;

use catalog::{Catalog, MovieId, MovieRecord};
use futures::future::join_all;
use tracing::{debug, instrument, warn};

use crate::types::{LookupResult, LookupSource};

/// Well-known space titles shown when nothing else matches
pub const DEFAULT_FALLBACK_IDS: [MovieId; 10] = [
    157336, // Interstellar
    286217, // The Martian
    49026,  // Gravity
    568,    // Apollo 13
    62,     // 2001: A Space Odyssey
    329,    // Jurassic Park
    1726,   // Iron Man
    27205,  // Inception
    49538,  // Moon
    68718,  // Elysium
];

/// Fixed-id lookup through the single-item endpoint
#[derive(Debug, Clone)]
pub struct FallbackSource {
    catalog: Arc<dyn Catalog>,
    ids: Vec<MovieId>,
}

impl FallbackSource {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            ids: DEFAULT_FALLBACK_IDS.to_vec(),
        }
    }

    /// Replace the fallback id list (builder pattern)
    pub fn with_ids(mut self, ids: Vec<MovieId>) -> Self {
        self.ids = ids;
        self
    }

    pub fn ids(&self) -> &[MovieId] {
        &self.ids
    }

    /// Fetch every fallback id concurrently
    #[instrument(skip(self), fields(ids = self.ids.len()))]
    pub async fn get_results(&self) -> LookupResult {
        let fetched = join_all(self.ids.iter().map(|id| self.fetch(*id))).await;
        let records: Vec<MovieRecord> = fetched.into_iter().flatten().collect();

        debug!(
            "Fallback fetched {} of {} titles",
            records.len(),
            self.ids.len()
        );
        LookupResult::new(LookupSource::Fallback, records)
    }

    async fn fetch(&self, id: MovieId) -> Option<MovieRecord> {
        match self.catalog.movie_details(id).await {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Fallback title {} unavailable: {}", id, e);
                None
            }
        }
    }
}
