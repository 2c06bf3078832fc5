//! Query Expander
//!
//! Turns casual text into a comma-separated keyword string the catalog
//! lookups can work with.
//!
//! ## Algorithm
//! 1. Lowercase the query
//! 2. Split on runs of non-word characters
//! 3. Drop tokens of two characters or fewer and stop words
//! 4. Replace known concept words with their expansion phrase
//! 5. Join everything with commas

use std::sync::LazyLock;

use regex::Regex;

use crate::concepts::{expansion_for, is_stop_word};

/// Tokens shorter than this never reach the catalog ("a", "of", "an")
const MIN_TOKEN_CHARS: usize = 3;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("static pattern is valid"));

/// Expand a raw query. Never fails; may return an empty string.
pub fn expand_query(query: &str) -> String {
    let lowered = query.to_lowercase();
    NON_WORD
        .split(&lowered)
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS && !is_stop_word(word))
        .map(|word| expansion_for(word).unwrap_or(word))
        .collect::<Vec<_>>()
        .join(",")
}
