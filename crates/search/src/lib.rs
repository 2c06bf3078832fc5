//! Search crate for the ReelSearch movie finder.
//!
//! This crate wires the interpreter, the catalog lookups and the record
//! pipeline into one search:
//! - `ResultAggregator` decides which lookups to run and post-processes them
//! - `SearchOrchestrator` runs interpretation then aggregation
//! - `SearchSession` is the state a front end renders (query, results,
//!   loading flag, user-visible error)

pub mod aggregator;
pub mod config;
pub mod orchestrator;
pub mod session;

pub use aggregator::ResultAggregator;
pub use config::{
    AggregatorConfig, DEFAULT_TRIGGER_PATTERN, ENV_CATALOG_KEY, ENV_CATALOG_URL, ENV_INFERENCE_KEY,
    ENV_INFERENCE_URL, SearchConfig,
};
pub use orchestrator::SearchOrchestrator;
pub use session::{FETCH_FAILED_MESSAGE, SearchOutcome, SearchSession, no_results_message};
