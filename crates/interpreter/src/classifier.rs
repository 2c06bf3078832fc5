//! Similarity classifier client for the inference endpoint.
//!
//! This module provides the client used to score a query against the fixed
//! genre sentences. It handles:
//! - Building the sentence-similarity request
//! - Bearer credential on every call
//! - Validating that one score comes back per candidate

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::InferenceError;

/// Sentence-similarity model used by default
pub const DEFAULT_INFERENCE_URL: &str =
    "https://api-inference.huggingface.co/models/sentence-transformers/all-mpnet-base-v2";

/// Scores a text against candidate sentences.
///
/// Returns one similarity score per candidate, in candidate order.
#[async_trait]
pub trait LabelClassifier: Send + Sync + std::fmt::Debug {
    async fn score(&self, text: &str, candidates: &[&str]) -> Result<Vec<f64>, InferenceError>;
}

/// Connection settings for [`HfClassifier`]
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub endpoint: String,
    pub api_key: String,
}

impl InferenceConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_INFERENCE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the model endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Serialize)]
struct SimilarityRequest<'a> {
    inputs: SimilarityInputs<'a>,
}

#[derive(Serialize)]
struct SimilarityInputs<'a> {
    source_sentence: &'a str,
    sentences: &'a [&'a str],
}

/// Classifier backed by a hosted sentence-similarity model
#[derive(Debug, Clone)]
pub struct HfClassifier {
    client: reqwest::Client,
    config: InferenceConfig,
}

impl HfClassifier {
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, config })
    }

    /// Endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl LabelClassifier for HfClassifier {
    async fn score(&self, text: &str, candidates: &[&str]) -> Result<Vec<f64>, InferenceError> {
        debug!("Scoring query against {} candidate labels", candidates.len());

        let body = SimilarityRequest {
            inputs: SimilarityInputs {
                source_sentence: text,
                sentences: candidates,
            },
        };
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Inference endpoint returned {}", status);
            return Err(InferenceError::Status(status.as_u16()));
        }

        let json: Value = response.json().await?;
        parse_scores(json, candidates.len())
    }
}

/// Pull the score array out of a similarity response
fn parse_scores(json: Value, expected_len: usize) -> Result<Vec<f64>, InferenceError> {
    if let Some(message) = json.get("error").and_then(Value::as_str) {
        return Err(InferenceError::InvalidResponse(message.to_string()));
    }

    let items = json
        .as_array()
        .ok_or_else(|| InferenceError::InvalidResponse("expected an array of scores".into()))?;

    let scores = items
        .iter()
        .map(|item| {
            item.as_f64()
                .ok_or_else(|| InferenceError::InvalidResponse(format!("non-numeric score {item}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if scores.len() != expected_len {
        return Err(InferenceError::InvalidResponse(format!(
            "expected {} scores, got {}",
            expected_len,
            scores.len()
        )));
    }
    Ok(scores)
}
