//! Semantic Interpreter
//!
//! Best-effort enrichment on top of the expander: classify the raw query
//! against the fixed genre labels and append the strongest matches.
//!
//! ## Algorithm
//! 1. Expand the query (always succeeds)
//! 2. If a classifier is configured, score the query against every label
//! 3. Keep labels scoring above the threshold, strongest first, at most
//!    `max_labels` of them
//! 4. Append their keywords to the expansion
//!
//! Any classifier failure is logged and the expansion is returned as-is.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::classifier::LabelClassifier;
use crate::expander::expand_query;
use crate::labels::{GENRE_LABELS, candidate_sentences};

/// Label selection settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemanticConfig {
    /// A label must score strictly above this to be used
    pub threshold: f64,
    /// At most this many labels are appended
    pub max_labels: usize,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            max_labels: 2,
        }
    }
}

/// Expander plus optional label classification
#[derive(Debug, Clone)]
pub struct SemanticInterpreter {
    classifier: Option<Arc<dyn LabelClassifier>>,
    config: SemanticConfig,
}

impl SemanticInterpreter {
    /// Interpreter that enriches with the given classifier
    pub fn new(classifier: Arc<dyn LabelClassifier>) -> Self {
        Self {
            classifier: Some(classifier),
            config: SemanticConfig::default(),
        }
    }

    /// Interpreter that never calls out and only expands
    pub fn expansion_only() -> Self {
        Self {
            classifier: None,
            config: SemanticConfig::default(),
        }
    }

    /// Override label selection settings (builder pattern)
    pub fn with_config(mut self, config: SemanticConfig) -> Self {
        self.config = config;
        self
    }

    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    /// Interpret a raw query into the keyword string used for lookups
    #[instrument(skip(self))]
    pub async fn interpret(&self, query: &str) -> String {
        let expanded = expand_query(query);

        let Some(classifier) = &self.classifier else {
            return expanded;
        };

        let sentences = candidate_sentences();
        let scores = match classifier.score(query, &sentences).await {
            Ok(scores) => scores,
            Err(e) => {
                warn!("Semantic interpretation failed, using expansion only: {}", e);
                return expanded;
            }
        };

        let labels = self.select_labels(&scores);
        debug!("Selected labels {:?}", labels);

        join_parts(&expanded, &labels.join(","))
    }

    /// Keywords of the labels that clear the threshold, strongest first
    fn select_labels(&self, scores: &[f64]) -> Vec<&'static str> {
        let mut matched: Vec<(f64, &'static str)> = scores
            .iter()
            .zip(GENRE_LABELS.iter())
            .filter(|(score, _)| **score > self.config.threshold)
            .map(|(score, label)| (*score, label.keyword))
            .collect();

        matched.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        matched.truncate(self.config.max_labels);

        matched.into_iter().map(|(_, keyword)| keyword).collect()
    }
}

/// Join two comma lists without producing empty entries
fn join_parts(expanded: &str, labels: &str) -> String {
    match (expanded.is_empty(), labels.is_empty()) {
        (_, true) => expanded.to_string(),
        (true, false) => labels.to_string(),
        (false, false) => format!("{expanded},{labels}"),
    }
}
