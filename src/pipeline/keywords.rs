//! TF-IDF-plus-frequency keyword extraction.
//!
//! Runs over the full, unsampled document, independent of sentence ranking.
//! Each vocabulary word is scored by aggregating its TF-IDF weight across
//! sentence-like segments and blending in its document-wide relative
//! frequency. The returned list length adapts to document size and lexical
//! complexity.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::nlp::tokenizer::tokenize_words;
use crate::types::Keyword;
use crate::vectorize::tfidf::TfidfVectorizer;

/// Configuration for keyword extraction.
#[derive(Debug, Clone)]
pub struct KeywordConfig {
    /// Weight of the aggregated TF-IDF component.
    pub tfidf_weight: f64,
    /// Weight of the relative-frequency component.
    pub freq_weight: f64,
    /// Minimum word length (exclusive) for candidate keywords.
    pub min_word_len: usize,
    /// Unique-word count at which complexity saturates.
    pub complexity_scale: usize,
    /// Bounds on the base keyword count before complexity scaling.
    pub min_base: usize,
    pub max_base: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            tfidf_weight: 0.7,
            freq_weight: 0.3,
            min_word_len: 3,
            complexity_scale: 1000,
            min_base: 8,
            max_base: 50,
        }
    }
}

/// Keyword extractor over the full document text.
#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    config: KeywordConfig,
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KeywordConfig) -> Self {
        Self { config }
    }

    /// Dynamic keyword-list length for a document.
    ///
    /// `base = clamp(ceil(sentence_count / 3), 8, 50)` scaled by lexical
    /// complexity, where complexity is the distinct count of word-character
    /// runs of length >= 4, saturating at [`KeywordConfig::complexity_scale`].
    pub fn target_count(&self, text: &str, sentence_count: usize) -> usize {
        let lowered = text.to_lowercase();
        let unique: FxHashSet<&str> = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|w| w.chars().count() > self.config.min_word_len)
            .collect();
        let complexity = (unique.len() as f64 / self.config.complexity_scale as f64).min(1.0);

        let base = ((sentence_count as f64 / 3.0).ceil() as usize)
            .clamp(self.config.min_base, self.config.max_base);
        ((base as f64) * (0.7 + 0.6 * complexity)).ceil() as usize
    }

    /// Extract up to `top_n` keywords from the document text.
    ///
    /// Output is sorted by score descending (ties by word, for determinism);
    /// every returned keyword has a positive score and more than
    /// [`KeywordConfig::min_word_len`] characters.
    pub fn extract(&self, text: &str, top_n: usize) -> Vec<Keyword> {
        // Document-wide frequency over filtered words.
        let words: Vec<String> = tokenize_words(text)
            .into_iter()
            .filter(|w| w.chars().count() > self.config.min_word_len)
            .collect();
        let total_words = words.len();
        let mut freq: FxHashMap<&str, usize> = FxHashMap::default();
        for word in &words {
            *freq.entry(word.as_str()).or_insert(0) += 1;
        }

        // Sentence-like segments: same punctuation rule as the sentence
        // tokenizer but without the length filter.
        let segments: Vec<String> = text
            .split(|c: char| matches!(c, '.' | '!' | '?'))
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();
        if segments.is_empty() {
            return Vec::new();
        }

        let corpus: Vec<Vec<String>> = segments.iter().map(|s| tokenize_words(s)).collect();
        let vectorizer = TfidfVectorizer::fit(&corpus);
        let matrix = vectorizer.transform(&segments);

        // Aggregate nonzero TF-IDF weight per vocabulary word across segments.
        let mut aggregate: FxHashMap<usize, f64> = FxHashMap::default();
        for row in &matrix {
            for (slot, &weight) in row.iter().enumerate() {
                if weight != 0.0 {
                    *aggregate.entry(slot).or_insert(0.0) += weight;
                }
            }
        }

        let names = vectorizer.feature_names();
        let mut keywords: Vec<Keyword> = aggregate
            .into_iter()
            .map(|(slot, tfidf_sum)| {
                let word = &names[slot];
                let relative = if total_words > 0 {
                    freq.get(word.as_str()).copied().unwrap_or(0) as f64 / total_words as f64
                } else {
                    0.0
                };
                Keyword {
                    word: word.clone(),
                    score: self.config.tfidf_weight * tfidf_sum
                        + self.config.freq_weight * relative,
                }
            })
            .filter(|k| k.score > 0.0 && k.word.chars().count() > self.config.min_word_len)
            .collect();

        keywords.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.word.cmp(&b.word)));
        keywords.truncate(top_n);
        keywords
    }
}
