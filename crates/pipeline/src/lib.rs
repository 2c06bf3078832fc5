//! Post-processing for movie records gathered by the search sources.
//!
//! This crate provides:
//! - Filter trait and implementations for record filtering
//! - FilterPipeline for composing filters
//! - `merge_unique` for combining per-source lists
//! - `rank_by_popularity` for final ordering and truncation
//!
//! ## Architecture
//! Records pass through three stages once every lookup has returned:
//! 1. Lists from all sources are merged, keeping the first copy of each id
//! 2. Filters drop records that can't be shown (no poster, adult content)
//! 3. Survivors are ordered by popularity and cut to the display limit
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::filters::*;
//! use pipeline::{FilterPipeline, merge_unique, rank_by_popularity};
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(HasPosterFilter)
//!     .add_filter(AdultContentFilter);
//!
//! let merged = merge_unique([direct.records, discovered.records]);
//! let shown = rank_by_popularity(pipeline.apply(merged), 20);
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod merge;
pub mod ranking;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use merge::merge_unique;
pub use ranking::{rank_by_popularity, truncate_in_order};
pub use traits::Filter;
