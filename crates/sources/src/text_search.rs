//! Text Search Source
//!
//! Sends the interpreted keyword string straight to the catalog's title
//! search. Cheapest lookup, and usually the best one when the user typed an
//! actual title.

use std::sync::Arc;

use catalog::Catalog;
use tracing::{debug, instrument};

use crate::types::{LookupResult, LookupSource, or_empty};

/// Direct free-text search against the catalog
#[derive(Debug, Clone)]
pub struct TextSearchSource {
    catalog: Arc<dyn Catalog>,
}

impl TextSearchSource {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Search for `keywords`. Blank input issues no request.
    #[instrument(skip(self))]
    pub async fn get_results(&self, keywords: &str) -> LookupResult {
        if keywords.trim().is_empty() {
            return LookupResult::new(LookupSource::TextSearch, Vec::new());
        }

        let records = or_empty(
            LookupSource::TextSearch,
            "search",
            self.catalog.search_movies(keywords).await,
        );
        debug!("Text search returned {} records", records.len());
        LookupResult::new(LookupSource::TextSearch, records)
    }
}
