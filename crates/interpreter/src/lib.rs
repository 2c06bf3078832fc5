//! Query interpretation for movie search.
//!
//! This crate turns what the user typed into the keyword string the catalog
//! lookups run on:
//! - `expander`: static concept expansion and stop-word filtering
//! - `classifier`: client for the hosted sentence-similarity model
//! - `semantic`: best-effort enrichment that appends matching genre labels
//!
//! ## Example Usage
//! ```ignore
//! use std::sync::Arc;
//! use interpreter::{HfClassifier, InferenceConfig, SemanticInterpreter, expand_query};
//!
//! assert!(expand_query("funny movies about space").starts_with("comedy"));
//!
//! let classifier = HfClassifier::new(InferenceConfig::new(hf_key))?;
//! let interpreter = SemanticInterpreter::new(Arc::new(classifier));
//! let keywords = interpreter.interpret("funny movies about space").await;
//! ```

pub mod classifier;
pub mod concepts;
pub mod error;
pub mod expander;
pub mod labels;
pub mod semantic;

// Re-export main types
pub use classifier::{DEFAULT_INFERENCE_URL, HfClassifier, InferenceConfig, LabelClassifier};
pub use error::InferenceError;
pub use expander::expand_query;
pub use labels::{GENRE_LABELS, GenreLabel};
pub use semantic::{SemanticConfig, SemanticInterpreter};
