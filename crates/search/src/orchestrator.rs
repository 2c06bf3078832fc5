//! # Search Orchestrator
//!
//! This module coordinates one search end to end:
//! 1. Interpret the raw query (expansion plus optional label enrichment)
//! 2. Aggregate catalog lookups for the interpreted string
//! 3. Return the ranked records
//!
//! Both steps run on their own task, so a panic in the classifier or in
//! the lookups becomes an `Err` here instead of taking the caller down.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use catalog::{Catalog, MovieRecord, TmdbClient};
use interpreter::{HfClassifier, LabelClassifier, SemanticInterpreter};
use tracing::info;

use crate::aggregator::ResultAggregator;
use crate::config::SearchConfig;

/// Main orchestrator that coordinates the search pipeline
#[derive(Clone)]
pub struct SearchOrchestrator {
    interpreter: Arc<SemanticInterpreter>,
    aggregator: Arc<ResultAggregator>,
}

impl SearchOrchestrator {
    /// Create an orchestrator over an existing catalog and classifier
    ///
    /// Without a classifier the interpreter runs in expansion-only mode.
    pub fn new(
        catalog: Arc<dyn Catalog>,
        classifier: Option<Arc<dyn LabelClassifier>>,
        config: &SearchConfig,
    ) -> Result<Self> {
        let interpreter = match classifier {
            Some(classifier) => SemanticInterpreter::new(classifier),
            None => SemanticInterpreter::expansion_only(),
        }
        .with_config(config.semantic);

        let aggregator = ResultAggregator::new(catalog, config.aggregator.clone())?;

        Ok(Self {
            interpreter: Arc::new(interpreter),
            aggregator: Arc::new(aggregator),
        })
    }

    /// Build the HTTP clients described by `config` and wire them up
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        let catalog = TmdbClient::new(config.catalog.clone())
            .context("Failed to create catalog client")?;
        info!("Catalog client ready at {}", catalog.base_url());

        let classifier: Option<Arc<dyn LabelClassifier>> = match &config.inference {
            Some(inference) => {
                let classifier = HfClassifier::new(inference.clone())
                    .context("Failed to create inference client")?;
                info!("Label classification enabled via {}", classifier.endpoint());
                Some(Arc::new(classifier) as Arc<dyn LabelClassifier>)
            }
            None => {
                info!("No inference credential, label classification disabled");
                None
            }
        };

        Self::new(Arc::new(catalog), classifier, config)
    }

    /// Interpret a raw query without searching
    pub async fn interpret(&self, raw: &str) -> String {
        self.interpreter.interpret(raw).await
    }

    /// Main entry point: movies matching a raw user query
    pub async fn search(&self, raw: &str) -> Result<Vec<MovieRecord>> {
        // Start timing
        let start_time = Instant::now();

        let interpreter = self.interpreter.clone();
        let aggregator = self.aggregator.clone();
        let query = raw.to_string();
        let results = tokio::spawn(async move {
            let keywords = interpreter.interpret(&query).await;
            info!("Interpreted {:?} as {:?}", query, keywords);
            aggregator.aggregate(&keywords).await
        })
        .await
        .context("Search task failed")?;

        info!(
            "Total time to search for {:?}: {:.2?} ({} results)",
            raw,
            start_time.elapsed(),
            results.len()
        );
        Ok(results)
    }
}
