//! Genre Discovery Source
//!
//! Popular, well-voted movies in one genre. Used instead of keyword
//! discovery when the query clearly points at a genre.

use std::sync::Arc;

use catalog::{Catalog, DiscoverQuery, GenreId, SCIENCE_FICTION_GENRE};
use tracing::{debug, instrument};

use crate::types::{LookupResult, LookupSource, or_empty};

/// Genre-filtered discovery
#[derive(Debug, Clone)]
pub struct GenreDiscoverySource {
    catalog: Arc<dyn Catalog>,

    /// Genre to discover in
    genre_id: GenreId,

    /// Only well-known movies: minimum vote count, if any
    min_vote_count: Option<u32>,
}

impl GenreDiscoverySource {
    /// Science-fiction discovery limited to movies with 1000+ votes
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            genre_id: SCIENCE_FICTION_GENRE,
            min_vote_count: Some(1000),
        }
    }

    /// Configure the genre (default: science fiction)
    pub fn with_genre(mut self, genre_id: GenreId) -> Self {
        self.genre_id = genre_id;
        self
    }

    /// Configure the minimum vote count (default: 1000, `None` disables)
    pub fn with_min_vote_count(mut self, count: Option<u32>) -> Self {
        self.min_vote_count = count;
        self
    }

    pub fn genre_id(&self) -> GenreId {
        self.genre_id
    }

    #[instrument(skip(self), fields(genre_id = self.genre_id))]
    pub async fn get_results(&self) -> LookupResult {
        let mut query = DiscoverQuery::by_genre(self.genre_id);
        if let Some(count) = self.min_vote_count {
            query = query.with_min_vote_count(count);
        }

        let records = or_empty(
            LookupSource::GenreDiscovery,
            "discovery",
            self.catalog.discover_movies(&query).await,
        );
        debug!("Genre discovery returned {} records", records.len());
        LookupResult::new(LookupSource::GenreDiscovery, records)
    }
}
