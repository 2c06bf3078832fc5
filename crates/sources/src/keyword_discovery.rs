//! Keyword Discovery Source
//!
//! Finds movies tagged with the terms of the interpreted query.
//!
//! ## Algorithm
//! 1. Split the keyword string on commas and spaces
//! 2. Resolve every distinct term to a catalog keyword id (concurrently)
//! 3. Run a discovery request per resolved id (concurrently)
//! 4. Concatenate everything; merging and ranking happen downstream
//!
//! Terms the catalog has no keyword for are skipped, and a failed call only
//! drops that one term.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use catalog::{Catalog, DiscoverQuery, KeywordId, MovieRecord};
use futures::future::join_all;
use regex::Regex;
use tracing::{debug, instrument, warn};

use crate::types::{LookupResult, LookupSource, or_empty};

static TERM_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[, ]+").expect("static pattern is valid"));

/// Split a keyword string into distinct, non-empty terms (first occurrence kept)
pub fn split_terms(keywords: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    TERM_SEPARATOR
        .split(keywords)
        .filter(|term| !term.is_empty())
        .filter(|term| seen.insert(*term))
        .collect()
}

/// Per-term keyword discovery
#[derive(Debug, Clone)]
pub struct KeywordDiscoverySource {
    catalog: Arc<dyn Catalog>,
}

impl KeywordDiscoverySource {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Discover movies for every term of `keywords`
    #[instrument(skip(self))]
    pub async fn get_results(&self, keywords: &str) -> LookupResult {
        let terms = split_terms(keywords);
        if terms.is_empty() {
            return LookupResult::new(LookupSource::KeywordDiscovery, Vec::new());
        }

        // Step 1: resolve all terms at once
        let resolved = join_all(terms.iter().map(|term| self.resolve(term))).await;
        let mut seen = HashSet::new();
        let keyword_ids: Vec<KeywordId> = resolved
            .into_iter()
            .flatten()
            .filter(|id| seen.insert(*id))
            .collect();
        debug!(
            "Resolved {} of {} terms to keyword ids",
            keyword_ids.len(),
            terms.len()
        );

        // Step 2: discover by every id at once
        let lists = join_all(keyword_ids.iter().map(|id| self.discover(*id))).await;
        let records: Vec<MovieRecord> = lists.into_iter().flatten().collect();

        debug!("Keyword discovery returned {} records", records.len());
        LookupResult::new(LookupSource::KeywordDiscovery, records)
    }

    async fn resolve(&self, term: &str) -> Option<KeywordId> {
        match self.catalog.find_keyword_id(term).await {
            Ok(id) => id,
            Err(e) => {
                warn!("Keyword lookup for {:?} failed: {}", term, e);
                None
            }
        }
    }

    async fn discover(&self, keyword_id: KeywordId) -> Vec<MovieRecord> {
        or_empty(
            LookupSource::KeywordDiscovery,
            "discovery",
            self.catalog
                .discover_movies(&DiscoverQuery::by_keyword(keyword_id))
                .await,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_terms() {
        assert_eq!(
            split_terms("comedy,humor, witty  satire,,"),
            vec!["comedy", "humor", "witty", "satire"]
        );
        assert_eq!(split_terms("space,space,alien"), vec!["space", "alien"]);
        assert!(split_terms("").is_empty());
        assert!(split_terms(" , ,").is_empty());
    }

    #[test]
    fn test_split_terms_breaks_multi_word_labels() {
        assert_eq!(
            split_terms("sci-fi,science fiction"),
            vec!["sci-fi", "science", "fiction"]
        );
    }
}
