//! Static vocabulary used by the query expander.
//!
//! Both tables are compile-time perfect-hash maps: immutable, built once,
//! free to share across threads.

use phf::{phf_map, phf_set};

/// Casual trigger word → comma-separated expansion phrase
pub static CONCEPT_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "space" => "sci-fi,astronaut,alien,spaceship,galaxy,NASA,cosmos,interstellar",
    "plane" => "aviation,pilot,aircraft,flight,jet,airplane",
    "funny" => "comedy,humor,witty,satire",
    "scary" => "horror,thriller,terror,fear",
    "romantic" => "romance,love,relationship",
};

/// Words that carry no search intent on their own
pub static STOP_WORDS: phf::Set<&'static str> = phf_set! {
    "movie",
    "film",
    "watch",
    "see",
    "about",
    "like",
};

/// Expansion phrase for a (lowercased) word, if it is a known concept
pub fn expansion_for(word: &str) -> Option<&'static str> {
    CONCEPT_MAP.get(word).copied()
}

/// True if the (lowercased) word is a stop word
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_concepts() {
        assert_eq!(expansion_for("funny"), Some("comedy,humor,witty,satire"));
        assert!(expansion_for("space").unwrap().contains("interstellar"));
        assert_eq!(expansion_for("boring"), None);
    }

    #[test]
    fn test_stop_words_are_lowercase_only() {
        assert!(is_stop_word("movie"));
        assert!(!is_stop_word("Movie"));
        assert!(!is_stop_word("movies"));
    }
}
