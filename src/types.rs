//! Core data model for the summarization pipeline.
//!
//! Result-facing types serialize with `camelCase` field names to match the
//! JSON contract expected by downstream consumers; settings enums serialize
//! as lowercase strings (`"fast"`, `"academic"`, ...).

use serde::{Deserialize, Serialize};

/// Speed mode controlling sampling aggressiveness and summary length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedMode {
    /// Aggressive sampling, 25% summary coverage.
    Fast,
    /// Moderate sampling, 35% summary coverage.
    #[default]
    Balanced,
    /// No sampling, 50% summary coverage.
    Thorough,
}

impl SpeedMode {
    /// Fraction of the original sentence count targeted by the summary.
    pub fn summary_fraction(&self) -> f64 {
        match self {
            Self::Fast => 0.25,
            Self::Balanced => 0.35,
            Self::Thorough => 0.50,
        }
    }
}

/// Document genre selecting a keyword-boost table for sentence ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    #[default]
    General,
    Academic,
    Legal,
    Journalistic,
}

/// Per-call settings. Immutable for the duration of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub speed_mode: SpeedMode,

    #[serde(default)]
    pub domain: Domain,

    #[serde(default)]
    pub use_abstractive: bool,

    /// Language code, carried through as display metadata only. Has no
    /// effect on tokenization or scoring.
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed_mode: SpeedMode::default(),
            domain: Domain::default(),
            use_abstractive: false,
            language: default_language(),
        }
    }
}

/// A sentence extracted during tokenization.
///
/// `original_index` is the sentence's position in the untruncated sentence
/// sequence. It is assigned exactly once and travels with the sentence
/// through sampling and scoring; it is never recomputed by text lookup, so
/// duplicated sentences stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    pub original_index: usize,
    pub text: String,
}

/// A sentence with its computed importance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceScore {
    pub sentence: String,
    pub score: f64,
    pub original_index: usize,
}

/// A ranked keyword. Output keywords always have `score > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub score: f64,
}

/// A quality-thresholded highlight sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub sentence: String,
    pub score: f64,
    pub original_index: usize,
}

/// Timing and compression metrics for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Percentage of sentences removed, rounded: `(1 - selected/total) * 100`.
    pub compression_ratio: u32,
    pub original_sentences: usize,
    pub summary_sentences: usize,
    pub processing_time_ms: u64,
}

/// The assembled result of one summarization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizationResult {
    pub summary: String,
    pub highlights: Vec<Highlight>,
    pub keywords: Vec<Keyword>,
    /// Scores for every original sentence, in document order.
    pub sentence_scores: Vec<SentenceScore>,
    pub metrics: Metrics,
}
