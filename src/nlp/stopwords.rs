//! Stopword filtering.
//!
//! A fixed table of common English function words, enumerated as a constant
//! rather than derived at runtime, so every invocation filters identically.
//! The table is immutable and shared; concurrent pipeline runs cannot
//! interfere through it.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// The stopword table. 62 common English function words.
pub const STOPWORDS: &[&str] = &[
    "the", "is", "at", "which", "on", "a", "an", "and", "or", "but",
    "in", "with", "to", "for", "of", "as", "by", "that", "this",
    "it", "from", "be", "are", "was", "were", "been", "have", "has",
    "had", "do", "does", "did", "will", "would", "could", "should",
    "may", "might", "can", "their", "them", "they", "we", "you", "your",
    "all", "also", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "than", "too", "very", "into", "through", "during",
];

static STOPWORD_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| STOPWORDS.iter().copied().collect());

/// Check whether a (lowercased) word is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_stopwords() {
        assert!(is_stopword("the"));
        assert!(is_stopword("and"));
        assert!(is_stopword("during"));
        assert!(!is_stopword("machine"));
        assert!(!is_stopword("learning"));
    }

    #[test]
    fn test_lookup_is_exact() {
        // Callers lowercase before filtering; the table itself is lowercase.
        assert!(!is_stopword("The"));
    }

    #[test]
    fn test_table_size() {
        assert_eq!(STOPWORDS.len(), 62);
        // No duplicates in the constant table.
        let set: FxHashSet<&str> = STOPWORDS.iter().copied().collect();
        assert_eq!(set.len(), STOPWORDS.len());
    }
}
