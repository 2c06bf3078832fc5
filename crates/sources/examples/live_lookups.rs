//! Example: Run every lookup source against the live catalog
//!
//! Run with: TMDB_API_KEY=... cargo run --package sources --example live_lookups -- "horror,thriller"
//!
//! This example shows how to:
//! 1. Build a catalog client from an API key
//! 2. Run text search and keyword discovery concurrently
//! 3. Run genre discovery and the fallback fetch
//! 4. Display what each source returned

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use catalog::{CatalogConfig, TmdbClient};
use sources::{
    FallbackSource, GenreDiscoverySource, KeywordDiscoverySource, LookupResult, TextSearchSource,
};

fn print_result(result: &LookupResult, elapsed: std::time::Duration) {
    println!("{:?}: {} records in {:?}", result.source, result.len(), elapsed);
    for record in result.records.iter().take(5) {
        println!(
            "  - {} ({}) popularity {:.1}",
            record.title,
            record.release_year().unwrap_or("????"),
            record.popularity
        );
    }
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("info").init();

    println!("=== ReelSearch Lookup Sources Example ===\n");

    let api_key = std::env::var("TMDB_API_KEY").context("TMDB_API_KEY is not set")?;
    let keywords = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "horror,thriller,terror,fear".to_string());
    println!("Keywords: {}\n", keywords);

    let catalog = Arc::new(TmdbClient::new(CatalogConfig::new(api_key))?);

    // Text search and keyword discovery, concurrently
    let text = TextSearchSource::new(catalog.clone());
    let discovery = KeywordDiscoverySource::new(catalog.clone());
    let start = Instant::now();
    let (direct, discovered) = tokio::join!(
        text.get_results(&keywords),
        discovery.get_results(&keywords)
    );
    let elapsed = start.elapsed();
    print_result(&direct, elapsed);
    print_result(&discovered, elapsed);

    // Genre discovery
    let genre = GenreDiscoverySource::new(catalog.clone());
    let start = Instant::now();
    let by_genre = genre.get_results().await;
    print_result(&by_genre, start.elapsed());

    // Fallback list
    let fallback = FallbackSource::new(catalog);
    let start = Instant::now();
    let fetched = fallback.get_results().await;
    print_result(&fetched, start.elapsed());

    Ok(())
}
