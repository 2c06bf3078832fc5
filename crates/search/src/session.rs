//! Search session state.
//!
//! A `SearchSession` is what a front end renders: the current query, the
//! last result list, a loading flag, and an optional message for the user.
//! Every search failure ends up as that message; nothing is propagated.

use catalog::MovieRecord;
use tracing::{error, info};

use crate::orchestrator::SearchOrchestrator;

/// Shown when the search itself failed
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch movie recommendations";

/// Shown when the search succeeded but nothing was displayable
pub fn no_results_message(query: &str) -> String {
    format!(
        "No movies found for \"{query}\". Try more specific terms like:\n\
         - \"Sci-fi movies\"\n\
         - \"Space adventures\"\n\
         - \"Star Wars-like movies\""
    )
}

/// What a call to [`SearchSession::handle_search`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query, nothing was requested
    Skipped,
    /// Results are available in [`SearchSession::movies`]
    Found(usize),
    /// The search ran but returned nothing
    Empty,
    /// The search failed; the message is in [`SearchSession::error`]
    Failed,
}

pub struct SearchSession {
    orchestrator: SearchOrchestrator,
    query: String,
    movies: Vec<MovieRecord>,
    loading: bool,
    error: Option<String>,
}

impl SearchSession {
    pub fn new(orchestrator: SearchOrchestrator) -> Self {
        Self {
            orchestrator,
            query: String::new(),
            movies: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Run a search for the current query and update the session state.
    ///
    /// A blank query leaves the state untouched and issues no requests.
    pub async fn handle_search(&mut self) -> SearchOutcome {
        if self.query.trim().is_empty() {
            return SearchOutcome::Skipped;
        }

        self.loading = true;
        self.error = None;
        self.movies.clear();

        let result = self.orchestrator.search(&self.query).await;
        let outcome = match result {
            Ok(movies) if movies.is_empty() => {
                info!("No results for {:?}", self.query);
                self.error = Some(no_results_message(&self.query));
                SearchOutcome::Empty
            }
            Ok(movies) => {
                let count = movies.len();
                self.movies = movies;
                SearchOutcome::Found(count)
            }
            Err(e) => {
                error!("Search for {:?} failed: {:#}", self.query, e);
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
                SearchOutcome::Failed
            }
        };

        self.loading = false;
        outcome
    }
}
