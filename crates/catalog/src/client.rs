//! HTTP client for the movie catalog.
//!
//! [`Catalog`] is the seam the rest of the workspace talks to; [`TmdbClient`]
//! is the production implementation over a TMDB-compatible REST API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::types::{DiscoverQuery, Keyword, KeywordId, MovieId, MovieRecord, ResultsPage};

/// Default catalog API root
pub const DEFAULT_CATALOG_URL: &str = "https://api.themoviedb.org/3";

/// Read-only access to a movie catalog.
///
/// `Send + Sync` so one catalog can be shared behind an `Arc` by every
/// lookup source running concurrently.
#[async_trait]
pub trait Catalog: Send + Sync + std::fmt::Debug {
    /// Free-text title search (first page, adult content excluded)
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieRecord>>;

    /// Structured discovery by genre or keyword
    async fn discover_movies(&self, query: &DiscoverQuery) -> Result<Vec<MovieRecord>>;

    /// Resolve a term to the first matching keyword id, if any
    async fn find_keyword_id(&self, term: &str) -> Result<Option<KeywordId>>;

    /// Fetch a single movie with its keywords appended
    async fn movie_details(&self, id: MovieId) -> Result<MovieRecord>;
}

/// Connection settings for [`TmdbClient`]
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    /// Sent as the `api_key` query parameter on every request
    pub api_key: String,
}

impl CatalogConfig {
    /// Config pointing at the public catalog API
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the API root (tests point this at a local server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Catalog client over a TMDB-compatible REST API
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl TmdbClient {
    /// Build a client from config.
    ///
    /// Fails if the credential is blank or the HTTP client cannot be built.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(CatalogError::InvalidConfig("api_key is empty".into()));
        }
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, config })
    }

    /// Root URL this client sends requests to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// GET `path` with `params`, check the status, decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint_url(path);
        debug!("GET {} ({} params)", path, params.len());

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| CatalogError::Decode {
            endpoint: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl Catalog for TmdbClient {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieRecord>> {
        let params = [
            ("query", query.to_string()),
            ("page", "1".to_string()),
            ("include_adult", "false".to_string()),
        ];
        let page: ResultsPage<MovieRecord> = self.get_json("/search/movie", &params).await?;
        Ok(page.results)
    }

    async fn discover_movies(&self, query: &DiscoverQuery) -> Result<Vec<MovieRecord>> {
        let page: ResultsPage<MovieRecord> =
            self.get_json("/discover/movie", &query.to_params()).await?;
        Ok(page.results)
    }

    async fn find_keyword_id(&self, term: &str) -> Result<Option<KeywordId>> {
        let params = [("query", term.to_string())];
        let page: ResultsPage<Keyword> = self.get_json("/search/keyword", &params).await?;
        Ok(page.results.first().map(|keyword| keyword.id))
    }

    async fn movie_details(&self, id: MovieId) -> Result<MovieRecord> {
        let params = [("append_to_response", "keywords".to_string())];
        self.get_json(&format!("/movie/{id}"), &params).await
    }
}
