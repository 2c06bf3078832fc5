//! Fixed genre label set the semantic interpreter classifies against.

/// One candidate label: the sentence sent for similarity scoring, and the
/// keyword appended to the query when it matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreLabel {
    pub sentence: &'static str,
    pub keyword: &'static str,
}

/// Candidate labels, in the order their scores come back
pub const GENRE_LABELS: [GenreLabel; 6] = [
    GenreLabel {
        sentence: "science fiction space movie",
        keyword: "science fiction",
    },
    GenreLabel {
        sentence: "aviation and airplane films",
        keyword: "aviation",
    },
    GenreLabel {
        sentence: "comedy movies",
        keyword: "comedy",
    },
    GenreLabel {
        sentence: "horror films",
        keyword: "horror",
    },
    GenreLabel {
        sentence: "action adventure",
        keyword: "action",
    },
    GenreLabel {
        sentence: "romantic drama",
        keyword: "drama",
    },
];

/// Candidate sentences in label order
pub fn candidate_sentences() -> Vec<&'static str> {
    GENRE_LABELS.iter().map(|label| label.sentence).collect()
}
