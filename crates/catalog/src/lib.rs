//! # Catalog Crate
//!
//! This crate is the only place that knows how to talk to the movie catalog.
//!
//! ## Main Components
//!
//! - **types**: Movie records, keyword/genre ids, discovery requests
//! - **client**: The `Catalog` trait and the `TmdbClient` HTTP implementation
//! - **error**: Error types for catalog calls
//! - **memory**: Canned-data catalog for tests (`test-support` feature)
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, CatalogConfig, DiscoverQuery, TmdbClient, SCIENCE_FICTION_GENRE};
//!
//! let client = TmdbClient::new(CatalogConfig::new(api_key))?;
//!
//! let direct = client.search_movies("interstellar").await?;
//! let sci_fi = client
//!     .discover_movies(&DiscoverQuery::by_genre(SCIENCE_FICTION_GENRE).with_min_vote_count(1000))
//!     .await?;
//! ```

pub mod client;
pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod types;

// Re-export commonly used types for convenience
pub use client::{Catalog, CatalogConfig, DEFAULT_CATALOG_URL, TmdbClient};
pub use error::{CatalogError, Result};
#[cfg(any(test, feature = "test-support"))]
pub use memory::InMemoryCatalog;
pub use types::{
    DiscoverFilter, DiscoverQuery, GenreId, Keyword, KeywordId, MovieId, MovieRecord,
    POSTER_BASE_URL, ResultsPage, SCIENCE_FICTION_GENRE,
};
