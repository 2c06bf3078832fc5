//! Integration tests for the pipeline.
//!
//! These tests verify that merging, filtering and ranking work together on
//! records shaped the way the catalog returns them.

use catalog::MovieRecord;
use pipeline::filters::*;
use pipeline::{FilterPipeline, merge_unique, rank_by_popularity};
use serde_json::json;

fn record(value: serde_json::Value) -> MovieRecord {
    serde_json::from_value(value).unwrap()
}

fn create_test_setup() -> (Vec<MovieRecord>, Vec<MovieRecord>) {
    let direct = vec![
        record(json!({
            "id": 27205,
            "title": "Inception",
            "poster_path": "/inception.jpg",
            "popularity": 95.1,
            "vote_average": 8.4,
            "original_language": "en"
        })),
        // No artwork - should be filtered
        record(json!({
            "id": 1,
            "title": "Obscure Short",
            "poster_path": null,
            "popularity": 400.0
        })),
    ];

    let discovered = vec![
        // Duplicate of a direct hit with a different popularity snapshot
        record(json!({
            "id": 27205,
            "title": "Inception",
            "poster_path": "/inception.jpg",
            "popularity": 10.0
        })),
        record(json!({
            "id": 157336,
            "title": "Interstellar",
            "poster_path": "/interstellar.jpg",
            "popularity": 140.7
        })),
        // Adult - should be filtered
        record(json!({
            "id": 2,
            "title": "Flagged",
            "poster_path": "/flagged.jpg",
            "popularity": 300.0,
            "adult": true
        })),
        record(json!({
            "id": 49538,
            "title": "Moon",
            "poster_path": "/moon.jpg",
            "popularity": 22.3
        })),
    ];

    (direct, discovered)
}

#[test]
fn test_full_pipeline_filters_correctly() {
    let (direct, discovered) = create_test_setup();

    let merged = merge_unique([direct, discovered]);
    assert_eq!(merged.len(), 5);

    let pipeline = FilterPipeline::new()
        .add_filter(HasPosterFilter)
        .add_filter(AdultContentFilter);
    let filtered = pipeline.apply(merged);

    let ids: Vec<_> = filtered.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![27205, 157336, 49538]);
}

#[test]
fn test_ranking_after_filtering() {
    let (direct, discovered) = create_test_setup();

    let filtered = FilterPipeline::displayable().apply(merge_unique([direct, discovered]));
    let ranked = rank_by_popularity(filtered, 20);

    let ids: Vec<_> = ranked.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![157336, 27205, 49538]);

    // First copy of a duplicated id is the one that is ranked
    assert_eq!(ranked[1].popularity, 95.1);
}

#[test]
fn test_complete_pipeline_keeps_unknown_fields() {
    let (direct, discovered) = create_test_setup();

    let shown = rank_by_popularity(
        FilterPipeline::displayable().apply(merge_unique([direct, discovered])),
        2,
    );

    assert_eq!(shown.len(), 2);
    for movie in &shown {
        assert!(movie.has_poster());
        assert!(!movie.adult);
    }

    let inception = shown.iter().find(|r| r.id == 27205).unwrap();
    assert_eq!(inception.extra.get("original_language"), Some(&json!("en")));
}
