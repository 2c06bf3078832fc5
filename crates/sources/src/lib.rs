//! # Sources Crate
//!
//! This crate implements the catalog lookups the search pipeline fans out to.
//!
//! ## Components
//!
//! ### Text Search
//! The interpreted string sent to the catalog's free-text title search.
//!
//! ### Keyword Discovery
//! Each term resolved to a catalog keyword id, then discovered by id:
//! - "comedy,humor,satire" → three keyword lookups → three discoveries
//! - all lookups and discoveries run concurrently
//!
//! ### Genre Discovery
//! Popular, well-voted movies in a single genre (science fiction by default).
//!
//! ### Fallback
//! A fixed list of well-known titles fetched by id.
//!
//! Every source swallows its own catalog failures: a failed call is logged
//! and contributes nothing, it never fails the search.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{KeywordDiscoverySource, TextSearchSource};
//!
//! let text = TextSearchSource::new(catalog.clone());
//! let keywords = KeywordDiscoverySource::new(catalog.clone());
//!
//! let (direct, discovered) = tokio::join!(
//!     text.get_results("comedy,humor"),
//!     keywords.get_results("comedy,humor"),
//! );
//! ```

// Public modules
pub mod fallback;
pub mod genre_discovery;
pub mod keyword_discovery;
pub mod text_search;
pub mod types;

// Re-export commonly used types
pub use fallback::{DEFAULT_FALLBACK_IDS, FallbackSource};
pub use genre_discovery::GenreDiscoverySource;
pub use keyword_discovery::{KeywordDiscoverySource, split_terms};
pub use text_search::TextSearchSource;
pub use types::{LookupResult, LookupSource};
