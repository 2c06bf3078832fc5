//! In-memory catalog for tests.
//!
//! Answers every [`Catalog`] call from canned data and records what it was
//! asked, so pipeline tests can assert on both results and traffic.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::client::Catalog;
use crate::error::{CatalogError, Result};
use crate::types::{DiscoverFilter, DiscoverQuery, GenreId, KeywordId, MovieId, MovieRecord};

/// Canned-data catalog
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    search_results: HashMap<String, Vec<MovieRecord>>,
    keywords: HashMap<String, KeywordId>,
    keyword_movies: HashMap<KeywordId, Vec<MovieRecord>>,
    genre_movies: HashMap<GenreId, Vec<MovieRecord>>,
    details: HashMap<MovieId, MovieRecord>,
    fail_all: bool,
    calls: AtomicUsize,
    discover_log: Mutex<Vec<DiscoverQuery>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog where every call fails with HTTP 503
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Records returned by text search for `query` (case-insensitive)
    pub fn with_search_results(mut self, query: &str, records: Vec<MovieRecord>) -> Self {
        self.search_results.insert(query.to_lowercase(), records);
        self
    }

    /// Register a keyword term, its id, and the movies discovered by that id
    pub fn with_keyword(mut self, term: &str, id: KeywordId, records: Vec<MovieRecord>) -> Self {
        self.keywords.insert(term.to_lowercase(), id);
        self.keyword_movies.insert(id, records);
        self
    }

    /// Movies discovered by genre id
    pub fn with_genre(mut self, genre_id: GenreId, records: Vec<MovieRecord>) -> Self {
        self.genre_movies.insert(genre_id, records);
        self
    }

    /// Make a record available from the single-item endpoint
    pub fn with_details(mut self, record: MovieRecord) -> Self {
        self.details.insert(record.id, record);
        self
    }

    /// Total number of catalog calls served (including failed ones)
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every discovery request seen so far, in arrival order
    pub fn discover_queries(&self) -> Vec<DiscoverQuery> {
        self.discover_log
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    fn begin(&self, endpoint: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_all {
            return Err(CatalogError::Status {
                endpoint: endpoint.to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieRecord>> {
        self.begin("/search/movie")?;
        Ok(self
            .search_results
            .get(&query.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }

    async fn discover_movies(&self, query: &DiscoverQuery) -> Result<Vec<MovieRecord>> {
        if let Ok(mut log) = self.discover_log.lock() {
            log.push(query.clone());
        }
        self.begin("/discover/movie")?;
        let records = match query.filter {
            DiscoverFilter::Genre(id) => self.genre_movies.get(&id),
            DiscoverFilter::Keyword(id) => self.keyword_movies.get(&id),
        };
        Ok(records.cloned().unwrap_or_default())
    }

    async fn find_keyword_id(&self, term: &str) -> Result<Option<KeywordId>> {
        self.begin("/search/keyword")?;
        Ok(self.keywords.get(&term.to_lowercase()).copied())
    }

    async fn movie_details(&self, id: MovieId) -> Result<MovieRecord> {
        let endpoint = format!("/movie/{id}");
        self.begin(&endpoint)?;
        self.details
            .get(&id)
            .cloned()
            .ok_or(CatalogError::Status {
                endpoint,
                status: 404,
            })
    }
}
