// Sentence splitting rules shared by the quiz and key-point heuristics
use once_cell::sync::Lazy;
use regex::Regex;

// Terminal punctuation followed by whitespace; the quiz uses this one
static QUIZ_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

// Any run of terminal punctuation, whitespace or not
static PUNCTUATION_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Fragments between `[.!?]` + whitespace. The punctuation and the
/// whitespace are consumed; fragment text is returned untouched.
pub fn split_for_quiz(text: &str) -> Vec<&str> {
    QUIZ_BOUNDARY.split(text).collect()
}

/// Fragments between runs of `.`, `!` or `?`, empty ones dropped.
pub fn split_on_punctuation(text: &str) -> Vec<&str> {
    PUNCTUATION_RUN
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Token count when splitting on single spaces. Leading or doubled spaces
/// produce empty tokens and count too.
pub fn space_tokens(sentence: &str) -> usize {
    sentence.split(' ').count()
}
