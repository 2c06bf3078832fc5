//! Integration tests for the HTTP catalog client.
//!
//! Each test spins up a small `axum` server on a random local port that
//! imitates the catalog endpoints, then points `TmdbClient` at it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use catalog::{Catalog, CatalogConfig, CatalogError, DiscoverQuery, TmdbClient};
use serde_json::json;
use tokio::net::TcpListener;

type Params = HashMap<String, String>;
type Seen = Arc<Mutex<Vec<(String, Params)>>>;

async fn search_movie(State(seen): State<Seen>, Query(params): Query<Params>) -> impl IntoResponse {
    seen.lock().unwrap().push(("/search/movie".into(), params));
    Json(json!({
        "page": 1,
        "results": [
            { "id": 49538, "title": "Moon", "poster_path": "/moon.jpg", "popularity": 21.5, "vote_average": 7.6 },
            { "id": 1, "title": "No Poster", "popularity": 1.0 }
        ]
    }))
}

async fn discover_movie(State(seen): State<Seen>, Query(params): Query<Params>) -> impl IntoResponse {
    seen.lock().unwrap().push(("/discover/movie".into(), params));
    Json(json!({ "results": [ { "id": 157336, "title": "Interstellar", "poster_path": "/i.jpg" } ] }))
}

async fn search_keyword(State(seen): State<Seen>, Query(params): Query<Params>) -> impl IntoResponse {
    let term = params.get("query").cloned().unwrap_or_default();
    seen.lock().unwrap().push(("/search/keyword".into(), params));
    if term == "spaceship" {
        Json(json!({ "results": [ { "id": 9882, "name": "spaceship" }, { "id": 4, "name": "spaceships" } ] }))
    } else {
        Json(json!({ "results": [] }))
    }
}

async fn movie(Path(id): Path<u64>, State(seen): State<Seen>, Query(params): Query<Params>) -> axum::response::Response {
    seen.lock().unwrap().push((format!("/movie/{id}"), params));
    if id == 62 {
        Json(json!({
            "id": 62,
            "title": "2001: A Space Odyssey",
            "poster_path": "/2001.jpg",
            "keywords": { "keywords": [ { "id": 9882, "name": "spaceship" } ] }
        }))
        .into_response()
    } else if id == 500 {
        (StatusCode::OK, "not json").into_response()
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "status_code": 34 }))).into_response()
    }
}

async fn start_fake_catalog() -> (String, Seen, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake catalog");
    let addr = listener.local_addr().expect("Failed to get local address");
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route("/3/search/movie", get(search_movie))
        .route("/3/discover/movie", get(discover_movie))
        .route("/3/search/keyword", get(search_keyword))
        .route("/3/movie/{id}", get(movie))
        .with_state(seen.clone());

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake catalog failed");
    });

    (format!("http://{addr}/3"), seen, handle)
}

fn client_for(base_url: &str) -> TmdbClient {
    TmdbClient::new(CatalogConfig::new("test-key").with_base_url(base_url))
        .expect("Failed to build client")
}

#[tokio::test]
async fn test_search_movies_sends_credential_and_filters() {
    let (base_url, seen, handle) = start_fake_catalog().await;
    let client = client_for(&base_url);

    let records = client.search_movies("moon landing").await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Moon");
    assert!(records[0].has_poster());
    assert!(!records[1].has_poster());

    let seen = seen.lock().unwrap();
    let (path, params) = &seen[0];
    assert_eq!(path, "/search/movie");
    assert_eq!(params["api_key"], "test-key");
    assert_eq!(params["query"], "moon landing");
    assert_eq!(params["page"], "1");
    assert_eq!(params["include_adult"], "false");

    handle.abort();
}

#[tokio::test]
async fn test_discover_movies_sends_structured_criteria() {
    let (base_url, seen, handle) = start_fake_catalog().await;
    let client = client_for(&base_url);

    let query = DiscoverQuery::by_genre(878).with_min_vote_count(1000);
    let records = client.discover_movies(&query).await.unwrap();
    assert_eq!(records[0].id, 157336);

    let seen = seen.lock().unwrap();
    let (_, params) = &seen[0];
    assert_eq!(params["with_genres"], "878");
    assert_eq!(params["sort_by"], "popularity.desc");
    assert_eq!(params["vote_count.gte"], "1000");
    assert_eq!(params["include_adult"], "false");

    handle.abort();
}

#[tokio::test]
async fn test_find_keyword_id_takes_first_match() {
    let (base_url, _seen, handle) = start_fake_catalog().await;
    let client = client_for(&base_url);

    assert_eq!(client.find_keyword_id("spaceship").await.unwrap(), Some(9882));
    assert_eq!(client.find_keyword_id("zzzz").await.unwrap(), None);

    handle.abort();
}

#[tokio::test]
async fn test_movie_details_appends_keywords() {
    let (base_url, seen, handle) = start_fake_catalog().await;
    let client = client_for(&base_url);

    let record = client.movie_details(62).await.unwrap();
    assert_eq!(record.title, "2001: A Space Odyssey");
    assert!(record.extra.contains_key("keywords"));

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].1["append_to_response"], "keywords");

    handle.abort();
}

#[tokio::test]
async fn test_status_and_decode_errors() {
    let (base_url, _seen, handle) = start_fake_catalog().await;
    let client = client_for(&base_url);

    let err = client.movie_details(1).await.unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 404, .. }));

    let err = client.movie_details(500).await.unwrap_err();
    assert!(matches!(err, CatalogError::Decode { .. }));

    handle.abort();
}

#[tokio::test]
async fn test_unreachable_catalog_is_http_error() {
    // Nothing listens on port 9 (discard) on the loopback interface in CI
    let client = client_for("http://127.0.0.1:9/3");
    let err = client.search_movies("moon").await.unwrap_err();
    assert!(matches!(err, CatalogError::Http(_)));
}
