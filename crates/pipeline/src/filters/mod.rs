//! Filter implementations for the record pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod adult_content;
pub mod has_poster;

// Re-export for convenience
pub use adult_content::AdultContentFilter;
pub use has_poster::HasPosterFilter;
