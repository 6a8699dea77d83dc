//! TF-IDF vectorization.
//!
//! A [`TfidfVectorizer`] is fitted once over a corpus of pre-tokenized texts
//! (typically one entry per sentence) and then transforms raw texts into
//! dense weight vectors aligned to the fitted vocabulary. Instances are
//! per-call-scoped: each pipeline run fits its own vectorizer, so concurrent
//! runs share nothing.
//!
//! Term frequency uses max-normalization (counts divided by the largest
//! count in that text), not sum-normalization. IDF is `ln(N / (1 + df))`
//! with +1 smoothing; terms present in every corpus entry get a small
//! negative weight, which is a defined outcome rather than an error.

use rustc_hash::FxHashMap;

use crate::nlp::tokenizer::tokenize_words;

/// A fitted vocabulary with IDF weights.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    /// Token -> vocabulary slot.
    vocabulary: FxHashMap<String, usize>,
    /// Slot -> token, the inverse of `vocabulary`.
    feature_names: Vec<String>,
    /// Slot-aligned IDF weights.
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fit a vocabulary and IDF table over a corpus of token lists.
    ///
    /// Slots are assigned in first-occurrence order, so slot assignment is
    /// stable for a given corpus. `idf[slot] = ln(N / (1 + df))` where `N` is
    /// the corpus size and `df` the number of entries containing the token.
    pub fn fit(corpus: &[Vec<String>]) -> Self {
        let mut vocabulary: FxHashMap<String, usize> = FxHashMap::default();
        let mut feature_names: Vec<String> = Vec::new();
        let mut df: Vec<usize> = Vec::new();

        for tokens in corpus {
            let mut seen: Vec<bool> = vec![false; feature_names.len()];
            for token in tokens {
                let slot = match vocabulary.get(token) {
                    Some(&slot) => slot,
                    None => {
                        let slot = feature_names.len();
                        vocabulary.insert(token.clone(), slot);
                        feature_names.push(token.clone());
                        df.push(0);
                        seen.push(false);
                        slot
                    }
                };
                if !seen[slot] {
                    seen[slot] = true;
                    df[slot] += 1;
                }
            }
        }

        let n = corpus.len() as f64;
        let idf = df
            .iter()
            .map(|&count| (n / (1.0 + count as f64)).ln())
            .collect();

        Self {
            vocabulary,
            feature_names,
            idf,
        }
    }

    /// Transform texts into dense TF-IDF vectors aligned to the vocabulary.
    ///
    /// Each text is tokenized with [`tokenize_words`]; raw counts are divided
    /// by the maximum count in that text (zero counts leave the vector
    /// all-zero), and tokens outside the fitted vocabulary contribute
    /// nothing regardless of local frequency.
    pub fn transform(&self, texts: &[String]) -> Vec<Vec<f64>> {
        texts.iter().map(|text| self.transform_one(text)).collect()
    }

    fn transform_one(&self, text: &str) -> Vec<f64> {
        let tokens = tokenize_words(text);

        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for token in &tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }

        let mut vector = vec![0.0; self.feature_names.len()];
        let max_count = counts.values().copied().max().unwrap_or(0);
        if max_count == 0 {
            return vector;
        }

        for (token, count) in counts {
            if let Some(&slot) = self.vocabulary.get(token) {
                let tf = count as f64 / max_count as f64;
                vector[slot] = tf * self.idf[slot];
            }
        }
        vector
    }

    /// Vocabulary tokens in slot order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Number of vocabulary slots.
    pub fn vocab_size(&self) -> usize {
        self.feature_names.len()
    }
}
