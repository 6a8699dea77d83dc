//! # rapid-summarize
//!
//! Deterministic, single-document statistical text summarization.
//!
//! Given raw document text and a small [`Settings`] value, the pipeline
//! produces a ranked list of sentences by computed importance, an extractive
//! (optionally lightly-rewritten) summary, a ranked keyword list, and a
//! quality-thresholded set of highlight sentences, together with timing and
//! compression metrics.
//!
//! The numeric core is a TF-IDF vector space: sentences are scored by their
//! mean cosine similarity to every other sentence (a one-shot centrality
//! proxy), adjusted by domain, position, and length heuristics driven by
//! data tables. No model inference, no I/O, no shared mutable state: the
//! same `(text, settings)` always yields byte-identical results, and
//! concurrent calls need no locking.
//!
//! ## Example
//!
//! ```
//! use rapid_summarize::{summarize, Settings};
//!
//! let text = "Renewable generation expanded rapidly across every market. \
//!     Storage deployments doubled as battery prices kept falling. \
//!     Grid operators adapted their planning to variable generation. \
//!     Wholesale prices declined where renewable generation dominated.";
//!
//! let result = summarize(text, &Settings::default()).unwrap();
//! assert_eq!(result.metrics.original_sentences, 4);
//! assert_eq!(result.metrics.summary_sentences, 3);
//! ```

pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod types;
pub mod vectorize;

pub use errors::SummarizeError;
pub use pipeline::highlights::{HighlightConfig, HighlightSelector};
pub use pipeline::keywords::{KeywordConfig, KeywordExtractor};
pub use pipeline::ranker::{BoostTable, DomainBoosts, RankOutput, RankerConfig, SentenceRanker};
pub use pipeline::runner::{summarize, SummarizePipeline};
pub use types::{
    Domain, Highlight, Keyword, Metrics, Sentence, SentenceScore, Settings, SpeedMode,
    SummarizationResult,
};
