//! Core domain types for the movie catalog.
//!
//! The catalog owns the schema of a movie record; this crate only names the
//! handful of fields the search pipeline reads (id, artwork, popularity) and
//! carries everything else through untouched in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Type Aliases
// =============================================================================

/// Catalog identifier of a movie
pub type MovieId = u64;

/// Catalog identifier of a keyword (used by keyword discovery)
pub type KeywordId = u64;

/// Catalog identifier of a genre (used by genre discovery)
pub type GenreId = u32;

/// Genre id of "Science Fiction" in the catalog
pub const SCIENCE_FICTION_GENRE: GenreId = 878;

/// Image CDN prefix for poster paths at card resolution
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

// =============================================================================
// Movie Record
// =============================================================================

/// A movie as returned by the catalog.
///
/// Unknown fields are kept in `extra` and serialized back out flat, so a
/// record round-trips through the pipeline unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    /// Relative artwork path, e.g. "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg"
    #[serde(default)]
    pub poster_path: Option<String>,
    /// "YYYY-MM-DD" when known; the catalog sometimes sends an empty string
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub adult: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MovieRecord {
    /// Create a bare record with only an id and title
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: None,
            poster_path: None,
            release_date: None,
            popularity: 0.0,
            vote_average: 0.0,
            adult: false,
            extra: Map::new(),
        }
    }

    /// Set the poster path (builder pattern)
    pub fn with_poster(mut self, poster_path: impl Into<String>) -> Self {
        self.poster_path = Some(poster_path.into());
        self
    }

    /// Set the popularity score (builder pattern)
    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = popularity;
        self
    }

    /// Set the release date (builder pattern)
    pub fn with_release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = Some(release_date.into());
        self
    }

    /// True when the record carries a non-blank artwork reference
    pub fn has_poster(&self) -> bool {
        self.poster_path
            .as_deref()
            .is_some_and(|path| !path.trim().is_empty())
    }

    /// Full poster URL, if the record has artwork
    pub fn poster_url(&self) -> Option<String> {
        if !self.has_poster() {
            return None;
        }
        self.poster_path
            .as_deref()
            .map(|path| format!("{POSTER_BASE_URL}{path}"))
    }

    /// Release year taken from the first four characters of the release date
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .filter(|year| year.chars().all(|c| c.is_ascii_digit()))
    }

    /// Vote average formatted to one decimal place
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.vote_average)
    }

    /// Overview text, or a placeholder when the catalog has none
    pub fn overview_or_placeholder(&self) -> &str {
        match self.overview.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => "No description available.",
        }
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// Paged list wrapper used by every catalog list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsPage<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Keyword entry from the keyword search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: KeywordId,
    #[serde(default)]
    pub name: String,
}

/// What a discovery request filters on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoverFilter {
    Genre(GenreId),
    Keyword(KeywordId),
}

/// Structured discovery request
///
/// Defaults follow what the search pipeline always sends: most popular first,
/// adult content excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverQuery {
    pub filter: DiscoverFilter,
    pub sort_by: String,
    pub min_vote_count: Option<u32>,
    pub include_adult: bool,
}

impl DiscoverQuery {
    /// Discovery filtered to a single genre
    pub fn by_genre(genre_id: GenreId) -> Self {
        Self::new(DiscoverFilter::Genre(genre_id))
    }

    /// Discovery filtered to a single keyword
    pub fn by_keyword(keyword_id: KeywordId) -> Self {
        Self::new(DiscoverFilter::Keyword(keyword_id))
    }

    fn new(filter: DiscoverFilter) -> Self {
        Self {
            filter,
            sort_by: "popularity.desc".to_string(),
            min_vote_count: None,
            include_adult: false,
        }
    }

    /// Only return movies with at least this many votes
    pub fn with_min_vote_count(mut self, count: u32) -> Self {
        self.min_vote_count = Some(count);
        self
    }

    /// Query-string parameters for the discovery endpoint
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = match self.filter {
            DiscoverFilter::Genre(id) => vec![("with_genres", id.to_string())],
            DiscoverFilter::Keyword(id) => vec![("with_keywords", id.to_string())],
        };
        params.push(("sort_by", self.sort_by.clone()));
        if let Some(count) = self.min_vote_count {
            params.push(("vote_count.gte", count.to_string()));
        }
        params.push(("include_adult", self.include_adult.to_string()));
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_unknown_fields() {
        let json = serde_json::json!({
            "id": 157336,
            "title": "Interstellar",
            "poster_path": "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
            "release_date": "2014-11-05",
            "popularity": 140.2,
            "vote_average": 8.4,
            "genre_ids": [12, 18, 878],
            "original_language": "en"
        });

        let record: MovieRecord = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(record.id, 157336);
        assert_eq!(record.extra.get("original_language").unwrap(), "en");

        // Serializing back yields the same flat object
        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["genre_ids"], json["genre_ids"]);
        assert_eq!(back["title"], "Interstellar");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let record: MovieRecord = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(record.title, "");
        assert_eq!(record.popularity, 0.0);
        assert!(!record.has_poster());
        assert!(record.poster_url().is_none());
    }

    #[test]
    fn test_blank_poster_is_not_artwork() {
        let record = MovieRecord::new(1, "Blank").with_poster("   ");
        assert!(!record.has_poster());
        assert!(record.poster_url().is_none());

        let record = MovieRecord::new(2, "Moon").with_poster("/moon.jpg");
        assert!(record.has_poster());
        assert_eq!(
            record.poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/moon.jpg")
        );
    }

    #[test]
    fn test_display_helpers() {
        let mut record = MovieRecord::new(62, "2001: A Space Odyssey").with_release_date("1968-04-02");
        record.vote_average = 8.06;
        assert_eq!(record.release_year(), Some("1968"));
        assert_eq!(record.rating_label(), "8.1");
        assert_eq!(record.overview_or_placeholder(), "No description available.");

        record.release_date = Some(String::new());
        assert_eq!(record.release_year(), None);
    }

    #[test]
    fn test_discover_params() {
        let params = DiscoverQuery::by_genre(SCIENCE_FICTION_GENRE)
            .with_min_vote_count(1000)
            .to_params();
        assert_eq!(
            params,
            vec![
                ("with_genres", "878".to_string()),
                ("sort_by", "popularity.desc".to_string()),
                ("vote_count.gte", "1000".to_string()),
                ("include_adult", "false".to_string()),
            ]
        );

        let params = DiscoverQuery::by_keyword(9882).to_params();
        assert_eq!(params[0], ("with_keywords", "9882".to_string()));
        assert!(params.iter().all(|(key, _)| *key != "vote_count.gte"));
    }

    #[test]
    fn test_results_page_tolerates_missing_results() {
        let page: ResultsPage<Keyword> = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(page.results.is_empty());
    }
}
