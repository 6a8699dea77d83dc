//! Statistical highlight selection.
//!
//! Highlights are chosen by thresholding the score distribution rather than
//! by a fixed count: every sentence scoring at least `mean + 0.5 * stddev`
//! qualifies, clamped to `[min(3, n), ceil(n * 0.5)]`. Operates on the full
//! unsampled score set and is independent of the summary sentence count.

use crate::pipeline::ranker::sort_by_score_desc;
use crate::types::{Highlight, SentenceScore};

/// Configuration for highlight selection.
#[derive(Debug, Clone)]
pub struct HighlightConfig {
    /// Standard deviations above the mean for the quality threshold.
    pub threshold_sigma: f64,
    /// Minimum highlight count (capped by the sentence count).
    pub min_count: usize,
    /// Maximum highlight count as a fraction of the sentence count.
    pub max_fraction: f64,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            threshold_sigma: 0.5,
            min_count: 3,
            max_fraction: 0.5,
        }
    }
}

/// Quality-threshold highlight selector.
#[derive(Debug, Clone, Default)]
pub struct HighlightSelector {
    config: HighlightConfig,
}

impl HighlightSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HighlightConfig) -> Self {
        Self { config }
    }

    /// Select highlight sentences from the full score set.
    ///
    /// Zero score variance collapses the threshold to the mean, selecting
    /// ties only. Output is sorted by score descending, unlike the
    /// summary, which reads in document order.
    pub fn select(&self, scores: &[SentenceScore]) -> Vec<Highlight> {
        let n = scores.len();
        if n == 0 {
            return Vec::new();
        }

        let mean = scores.iter().map(|s| s.score).sum::<f64>() / n as f64;
        let variance = scores
            .iter()
            .map(|s| (s.score - mean).powi(2))
            .sum::<f64>()
            / n as f64;
        let threshold = mean + self.config.threshold_sigma * variance.sqrt();

        let mut sorted = scores.to_vec();
        sort_by_score_desc(&mut sorted);

        let qualifying = sorted.iter().take_while(|s| s.score >= threshold).count();

        let min_count = self.config.min_count.min(n);
        let max_count = (n as f64 * self.config.max_fraction).ceil() as usize;

        let take = if qualifying < min_count {
            min_count
        } else if qualifying > max_count {
            max_count
        } else {
            qualifying
        };

        sorted
            .into_iter()
            .take(take)
            .map(|s| Highlight {
                sentence: s.sentence,
                score: s.score,
                original_index: s.original_index,
            })
            .collect()
    }
}
