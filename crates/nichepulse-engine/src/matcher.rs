//! Keyword and term matching used by the demand scorer.
//!
//! Matching is a strategy behind [`SignalMatcher`] so a smarter matcher can
//! replace the deterministic [`LexicalMatcher`] without touching the scoring
//! contract.

use std::collections::BTreeSet;

/// Lowercase single words that mark a search term as commercial.
pub(crate) const INTENT_MARKERS: &[&str] = &[
    "best",
    "top",
    "vs",
    "versus",
    "alternative",
    "alternatives",
    "replacement",
    "review",
    "reviews",
    "pricing",
    "price",
    "prices",
    "cost",
    "costs",
    "cheap",
    "cheapest",
    "buy",
    "discount",
    "coupon",
    "deal",
    "deals",
    "compare",
    "comparison",
];

/// Words too common to carry meaning when comparing ad copy with forum text.
pub(crate) const STOPWORDS: &[&str] = &[
    "the", "and", "but", "for", "with", "from", "are", "was", "were", "been", "being", "have",
    "has", "had", "does", "did", "will", "would", "could", "should", "may", "might", "must",
    "can", "this", "that", "these", "those", "you", "she", "they", "your", "his", "her", "its",
    "our", "their", "what", "which", "who", "when", "where", "why", "how", "all", "each",
    "every", "both", "few", "more", "most", "other", "some", "such", "not", "only", "same",
    "than", "too", "very", "just", "also", "now", "here", "there", "about", "into", "over",
    "after", "before", "out", "off", "then", "else", "because", "until", "while", "during",
    "through", "again", "once", "any", "get", "got", "like", "know", "think", "want", "need",
    "use", "using", "used", "new", "first", "last", "one", "two", "way", "even", "well",
    "back", "still", "going", "make", "made", "anyone", "someone", "everyone", "something",
    "anything", "everything", "really", "much", "many", "dont", "ive",
];

/// Relevance of a keyword carrying a commercial-intent marker.
pub const MARKER_RELEVANCE: f64 = 1.0;
/// Relevance of any other keyword the collector flagged as buyer intent.
pub const BASE_RELEVANCE: f64 = 0.5;

/// Pluggable matching strategy for the heuristic parts of scoring.
pub trait SignalMatcher: Send + Sync {
    /// Relevance of a buyer-intent keyword in `[0.0, 1.0]`.
    ///
    /// Callers clamp the result, so out-of-range or NaN values degrade to the
    /// nearest bound (NaN to `0.0`) rather than corrupting the score.
    fn intent_relevance(&self, keyword: &str) -> f64;

    /// Normalized, deduplicated content terms of a text.
    fn terms(&self, text: &str) -> BTreeSet<String>;
}

/// Deterministic word-list matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalMatcher;

impl SignalMatcher for LexicalMatcher {
    fn intent_relevance(&self, keyword: &str) -> f64 {
        if words(keyword).any(|w| INTENT_MARKERS.contains(&w.as_str())) {
            MARKER_RELEVANCE
        } else {
            BASE_RELEVANCE
        }
    }

    fn terms(&self, text: &str) -> BTreeSet<String> {
        words(text).filter(|w| is_content_word(w)).collect()
    }
}

/// Split text into lowercase ASCII-alphanumeric words.
pub(crate) fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase)
}

/// At least three characters, at least one of them a letter, and not a
/// stopword. Bare numbers are not terms; `b2b` and `web3` are.
pub(crate) fn is_content_word(word: &str) -> bool {
    word.len() >= 3
        && word.chars().any(|c| c.is_ascii_alphabetic())
        && !STOPWORDS.contains(&word)
}
