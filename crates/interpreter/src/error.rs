//! Error types for the inference client.

use thiserror::Error;

/// Errors that can occur when calling the inference endpoint.
///
/// None of these ever reach the user: the interpreter logs them and falls
/// back to the plain expansion.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Inference request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Inference endpoint returned HTTP {0}")]
    Status(u16),

    #[error("Invalid response from inference endpoint: {0}")]
    InvalidResponse(String),
}
