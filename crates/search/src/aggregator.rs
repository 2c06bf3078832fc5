//! # Result Aggregator
//!
//! Turns an interpreted keyword string into the list of movies to show:
//! 1. Sniff the string for a genre trigger
//! 2. Genre path: popular, well-voted movies of that genre
//! 3. Generic path: text search and keyword discovery in parallel
//! 4. Merge and deduplicate by id, keep displayable records
//! 5. Rank by popularity and cap
//! 6. If nothing survived, show the fallback list instead
//!
//! Lookup failures never surface here: each source logs and drops its own,
//! so `aggregate` always returns a (possibly empty) list.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use catalog::{Catalog, MovieRecord};
use pipeline::{FilterPipeline, merge_unique, rank_by_popularity, truncate_in_order};
use regex::Regex;
use sources::{FallbackSource, GenreDiscoverySource, KeywordDiscoverySource, TextSearchSource};
use tracing::{info, instrument};

use crate::config::AggregatorConfig;

/// Routes a keyword string to catalog lookups and post-processes the results
#[derive(Clone)]
pub struct ResultAggregator {
    trigger: Regex,
    text_search: TextSearchSource,
    keyword_discovery: KeywordDiscoverySource,
    genre_discovery: GenreDiscoverySource,
    fallback: FallbackSource,
    filter_pipeline: Arc<FilterPipeline>,
    genre_limit: usize,
    generic_limit: usize,
    fallback_limit: usize,
}

impl ResultAggregator {
    /// Create an aggregator with all sources sharing one catalog
    ///
    /// Fails only if the trigger pattern is not a valid regex.
    pub fn new(catalog: Arc<dyn Catalog>, config: AggregatorConfig) -> Result<Self> {
        let trigger = Regex::new(&config.trigger_pattern)
            .with_context(|| format!("Invalid trigger pattern {:?}", config.trigger_pattern))?;

        Ok(Self {
            trigger,
            text_search: TextSearchSource::new(catalog.clone()),
            keyword_discovery: KeywordDiscoverySource::new(catalog.clone()),
            genre_discovery: GenreDiscoverySource::new(catalog.clone())
                .with_genre(config.genre_id)
                .with_min_vote_count(config.min_vote_count),
            fallback: FallbackSource::new(catalog).with_ids(config.fallback_ids),
            filter_pipeline: Arc::new(FilterPipeline::displayable()),
            genre_limit: config.genre_limit,
            generic_limit: config.generic_limit,
            fallback_limit: config.fallback_limit,
        })
    }

    /// True when the keyword string should be served by genre discovery
    pub fn is_genre_query(&self, keywords: &str) -> bool {
        self.trigger.is_match(keywords)
    }

    /// Main entry point: movies to display for an interpreted query
    #[instrument(skip(self))]
    pub async fn aggregate(&self, keywords: &str) -> Vec<MovieRecord> {
        let start_time = Instant::now();

        let results = if self.is_genre_query(keywords) {
            info!("Genre trigger matched, using genre discovery");
            self.genre_results().await
        } else {
            self.generic_results(keywords).await
        };

        let results = if results.is_empty() {
            info!("No displayable results, using fallback list");
            self.fallback_results().await
        } else {
            results
        };

        info!(
            "Aggregated {} results in {:.2?}",
            results.len(),
            start_time.elapsed()
        );
        results
    }

    async fn genre_results(&self) -> Vec<MovieRecord> {
        let discovered = self.genre_discovery.get_results().await;
        info!("Genre discovery returned {} records", discovered.len());

        let displayable = self.filter_pipeline.apply(merge_unique([discovered.records]));
        rank_by_popularity(displayable, self.genre_limit)
    }

    /// Text search and keyword discovery in parallel
    async fn generic_results(&self, keywords: &str) -> Vec<MovieRecord> {
        let (direct, discovered) = tokio::join!(
            self.text_search.get_results(keywords),
            self.keyword_discovery.get_results(keywords),
        );
        info!(
            "Generated {} text search and {} keyword discovery records",
            direct.len(),
            discovered.len()
        );

        let merged = merge_unique([direct.records, discovered.records]);
        info!("Merged records, total after deduplication: {}", merged.len());

        let displayable = self.filter_pipeline.apply(merged);
        rank_by_popularity(displayable, self.generic_limit)
    }

    /// Fallback list in its configured order
    async fn fallback_results(&self) -> Vec<MovieRecord> {
        let fetched = self.fallback.get_results().await;
        let displayable = self.filter_pipeline.apply(merge_unique([fetched.records]));
        truncate_in_order(displayable, self.fallback_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{DiscoverFilter, InMemoryCatalog};

    fn poster(id: u64, popularity: f64) -> MovieRecord {
        MovieRecord::new(id, format!("Movie {id}"))
            .with_poster(format!("/{id}.jpg"))
            .with_popularity(popularity)
    }

    fn aggregator(catalog: Arc<InMemoryCatalog>) -> ResultAggregator {
        ResultAggregator::new(catalog, AggregatorConfig::default()).unwrap()
    }

    #[test]
    fn test_invalid_trigger_rejected() {
        let config = AggregatorConfig::default().with_trigger_pattern("(unclosed");
        assert!(ResultAggregator::new(Arc::new(InMemoryCatalog::new()), config).is_err());
    }

    #[test]
    fn test_trigger_case_insensitive() {
        let aggregator = aggregator(Arc::new(InMemoryCatalog::new()));
        assert!(aggregator.is_genre_query("comedy,Sci-Fi"));
        assert!(aggregator.is_genre_query("NASA"));
        assert!(aggregator.is_genre_query("cosmos,interstellar"));
        assert!(!aggregator.is_genre_query("horror,thriller,planes"));
    }

    #[tokio::test]
    async fn test_genre_path_sorted_and_capped() {
        let mut records: Vec<_> = (1..=15).map(|i| poster(i, i as f64)).collect();
        // Most popular entries, but not displayable
        records.push(MovieRecord::new(100, "No art").with_popularity(500.0));
        let mut adult = poster(101, 400.0);
        adult.adult = true;
        records.push(adult);

        let catalog = Arc::new(InMemoryCatalog::new().with_genre(878, records));
        let aggregator = aggregator(catalog.clone());

        let results = aggregator.aggregate("galaxy").await;

        assert_eq!(results.len(), 12);
        assert_eq!(results[0].id, 15);
        assert!(results.iter().all(|r| r.has_poster() && !r.adult));
        assert!(!results.iter().any(|r| r.id == 100 || r.id == 101));
        // Only the genre discovery call, no text search
        assert_eq!(catalog.call_count(), 1);
        assert_eq!(catalog.discover_queries()[0].filter, DiscoverFilter::Genre(878));
    }

    #[tokio::test]
    async fn test_generic_path_merges_and_caps() {
        let direct: Vec<_> = (1..=10).map(|i| poster(i, 1.0)).collect();
        let discovered: Vec<_> = (5..=30).map(|i| poster(i, i as f64)).collect();
        let catalog = Arc::new(
            InMemoryCatalog::new()
                .with_search_results("heist", direct)
                .with_keyword("heist", 10051, discovered),
        );

        let results = aggregator(catalog).aggregate("heist").await;

        assert_eq!(results.len(), 20);
        assert_eq!(results[0].id, 30);
        let mut ids: Vec<_> = results.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[tokio::test]
    async fn test_fallback_keeps_configured_order() {
        let catalog = Arc::new(
            InMemoryCatalog::new()
                .with_details(poster(3, 1.0))
                .with_details(poster(1, 99.0))
                .with_details(MovieRecord::new(2, "No art")),
        );
        let config = AggregatorConfig::default().with_fallback_ids(vec![3, 2, 1]);
        let aggregator = ResultAggregator::new(catalog, config).unwrap();

        let results = aggregator.aggregate("nothing,matches").await;

        let ids: Vec<_> = results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
