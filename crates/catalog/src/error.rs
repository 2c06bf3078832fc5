//! Error types for the catalog crate.
//!
//! Every catalog call can fail independently. Callers in the search pipeline
//! log these and treat the failed call as an empty contribution, so the
//! variants only need enough context to make the log line useful.

use thiserror::Error;

/// Errors that can occur while talking to the movie catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The request never produced a response (DNS, connect, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status code
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// The response body was not the JSON shape we expected
    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The client was built with unusable settings (e.g. empty credential)
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
