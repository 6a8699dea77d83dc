//! Vector-space text representation.
//!
//! TF-IDF vectorization and cosine similarity, the numeric core behind
//! sentence centrality and keyword scoring.

pub mod similarity;
pub mod tfidf;
