//! Search configuration.
//!
//! Every knob has a default matching the production catalog, so the only
//! required value is the catalog credential.

use anyhow::{Result, bail};
use catalog::{CatalogConfig, GenreId, MovieId, SCIENCE_FICTION_GENRE};
use interpreter::{InferenceConfig, SemanticConfig};
use sources::DEFAULT_FALLBACK_IDS;

/// Terms in the interpreted query that switch to genre discovery
pub const DEFAULT_TRIGGER_PATTERN: &str = r"(?i)space|sci-fi|astronaut|nasa|galaxy|cosmos";

/// Environment variable holding the catalog credential (required)
pub const ENV_CATALOG_KEY: &str = "TMDB_API_KEY";
/// Environment variable holding the inference credential (optional)
pub const ENV_INFERENCE_KEY: &str = "HF_API_KEY";
pub const ENV_CATALOG_URL: &str = "TMDB_BASE_URL";
pub const ENV_INFERENCE_URL: &str = "HF_INFERENCE_URL";

/// Lookup routing and result limits
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatorConfig {
    /// Regex matched against the interpreted query
    pub trigger_pattern: String,

    /// Genre discovered when the trigger matches
    pub genre_id: GenreId,
    pub min_vote_count: Option<u32>,

    /// Cap on results from genre discovery
    pub genre_limit: usize,
    /// Cap on results from text search plus keyword discovery
    pub generic_limit: usize,

    /// Titles shown when every lookup came back empty
    pub fallback_ids: Vec<MovieId>,
    pub fallback_limit: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            trigger_pattern: DEFAULT_TRIGGER_PATTERN.to_string(),
            genre_id: SCIENCE_FICTION_GENRE,
            min_vote_count: Some(1000),
            genre_limit: 12,
            generic_limit: 20,
            fallback_ids: DEFAULT_FALLBACK_IDS.to_vec(),
            fallback_limit: 12,
        }
    }
}

impl AggregatorConfig {
    /// Replace the fallback id list (builder pattern)
    pub fn with_fallback_ids(mut self, ids: Vec<MovieId>) -> Self {
        self.fallback_ids = ids;
        self
    }

    /// Override the trigger regex
    pub fn with_trigger_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.trigger_pattern = pattern.into();
        self
    }
}

/// Everything needed to build a [`crate::SearchOrchestrator`]
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub catalog: CatalogConfig,
    /// `None` runs the interpreter in expansion-only mode
    pub inference: Option<InferenceConfig>,
    pub semantic: SemanticConfig,
    pub aggregator: AggregatorConfig,
}

impl SearchConfig {
    pub fn new(catalog: CatalogConfig) -> Self {
        Self {
            catalog,
            inference: None,
            semantic: SemanticConfig::default(),
            aggregator: AggregatorConfig::default(),
        }
    }

    /// Enable classification enrichment (builder pattern)
    pub fn with_inference(mut self, inference: InferenceConfig) -> Self {
        self.inference = Some(inference);
        self
    }

    pub fn with_aggregator(mut self, aggregator: AggregatorConfig) -> Self {
        self.aggregator = aggregator;
        self
    }

    /// Read credentials and endpoint overrides from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`SearchConfig::from_env`] with an arbitrary variable source.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let Some(catalog_key) = non_blank(&lookup, ENV_CATALOG_KEY) else {
            bail!("{ENV_CATALOG_KEY} is not set");
        };
        let mut catalog = CatalogConfig::new(catalog_key);
        if let Some(url) = non_blank(&lookup, ENV_CATALOG_URL) {
            catalog = catalog.with_base_url(url);
        }

        let mut config = Self::new(catalog);
        if let Some(inference) = Self::inference_from_lookup(&lookup) {
            config = config.with_inference(inference);
        }
        Ok(config)
    }

    /// Inference settings alone, for callers that never touch the catalog.
    ///
    /// `None` when no inference credential is set.
    pub fn inference_from_lookup(
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Option<InferenceConfig> {
        let key = non_blank(lookup, ENV_INFERENCE_KEY)?;
        let mut inference = InferenceConfig::new(key);
        if let Some(url) = non_blank(lookup, ENV_INFERENCE_URL) {
            inference = inference.with_endpoint(url);
        }
        Some(inference)
    }
}

fn non_blank(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|value| !value.trim().is_empty())
}
