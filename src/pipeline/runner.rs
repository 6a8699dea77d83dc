//! Pipeline orchestration.
//!
//! [`SummarizePipeline`] sequences the stages (sentence tokenization,
//! keyword extraction, centrality ranking, summary assembly, highlight
//! selection) and assembles the [`SummarizationResult`] with timing and
//! compression metrics. Stage boundaries emit `tracing` debug events with
//! per-stage durations; no subscriber is installed here.
//!
//! Every run is a pure function of `(text, settings)`: all intermediate
//! structures (vocabularies, vectors, score lists) are owned by the run and
//! discarded with it, so concurrent runs on different documents need no
//! locking.

use std::time::Instant;

use tracing::debug;

use crate::errors::SummarizeError;
use crate::nlp::tokenizer::split_sentences;
use crate::pipeline::highlights::HighlightSelector;
use crate::pipeline::keywords::KeywordExtractor;
use crate::pipeline::ranker::SentenceRanker;
use crate::pipeline::stitcher::stitch;
use crate::types::{Metrics, Settings, SummarizationResult};

/// Minimum selected-sentence count above which abstractive stitching runs.
const STITCH_MIN_SENTENCES: usize = 3;

/// The assembled summarization pipeline.
///
/// Stage configs are fixed at construction; the pipeline itself is stateless
/// across calls and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SummarizePipeline {
    ranker: SentenceRanker,
    keywords: KeywordExtractor,
    highlights: HighlightSelector,
}

impl SummarizePipeline {
    /// Build a pipeline with default stage configurations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the sentence ranker.
    pub fn with_ranker(mut self, ranker: SentenceRanker) -> Self {
        self.ranker = ranker;
        self
    }

    /// Override the keyword extractor.
    pub fn with_keywords(mut self, keywords: KeywordExtractor) -> Self {
        self.keywords = keywords;
        self
    }

    /// Override the highlight selector.
    pub fn with_highlights(mut self, highlights: HighlightSelector) -> Self {
        self.highlights = highlights;
        self
    }

    /// Summarize a document.
    ///
    /// Fails with [`SummarizeError::EmptyDocument`] when sentence
    /// tokenization yields nothing; every other edge case is a defined
    /// non-error outcome.
    pub fn summarize(
        &self,
        text: &str,
        settings: &Settings,
    ) -> Result<SummarizationResult, SummarizeError> {
        let started = Instant::now();

        let sentences = split_sentences(text)?;
        let total = sentences.len();
        debug!(sentences = total, "tokenized document");

        let stage = Instant::now();
        let target = self.keywords.target_count(text, total);
        let keywords = self.keywords.extract(text, target);
        debug!(
            keywords = keywords.len(),
            requested = target,
            elapsed_ms = stage.elapsed().as_millis() as u64,
            "extracted keywords"
        );

        let stage = Instant::now();
        let ranked = self.ranker.rank(&sentences, settings);
        let selected_count = ranked.selected.len();
        debug!(
            selected = selected_count,
            elapsed_ms = stage.elapsed().as_millis() as u64,
            "ranked sentences"
        );

        let summary = if settings.use_abstractive && selected_count > STITCH_MIN_SENTENCES {
            let parts: Vec<&str> = ranked.selected.iter().map(|s| s.sentence.as_str()).collect();
            stitch(&parts)
        } else {
            ranked
                .selected
                .iter()
                .map(|s| s.sentence.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        };

        let highlights = self.highlights.select(&ranked.scores);
        debug!(highlights = highlights.len(), "selected highlights");

        let compression_ratio =
            ((1.0 - selected_count as f64 / total as f64) * 100.0).round() as u32;

        Ok(SummarizationResult {
            summary,
            highlights,
            keywords,
            sentence_scores: ranked.scores,
            metrics: Metrics {
                compression_ratio,
                original_sentences: total,
                summary_sentences: selected_count,
                processing_time_ms: started.elapsed().as_millis() as u64,
            },
        })
    }
}

/// Summarize a document with default stage configurations.
///
/// Convenience wrapper over [`SummarizePipeline::new`] for one-off calls.
pub fn summarize(text: &str, settings: &Settings) -> Result<SummarizationResult, SummarizeError> {
    SummarizePipeline::new().summarize(text, settings)
}
