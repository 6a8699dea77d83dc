//! Speed-mode sentence sampling.
//!
//! Pairwise centrality scoring is `O(S² · V)`; the sampler bounds `S` on long
//! documents by thinning the sentence list before ranking. Sampling feeds
//! the ranker's selection pass only; keyword extraction and highlight
//! selection always see the full sentence set.

use crate::types::{Sentence, SpeedMode};

/// Sentence count above which fast mode samples at stride 2.
const FAST_THRESHOLD: usize = 50;

/// Sentence count above which balanced mode samples toward ~70% retention.
const BALANCED_THRESHOLD: usize = 100;

/// Pre-filter sentences according to the speed mode.
///
/// - `fast`: above [`FAST_THRESHOLD`] sentences, keep even indices.
/// - `balanced`: above [`BALANCED_THRESHOLD`], keep every k-th sentence with
///   `k = ceil(count / (count * 0.7))`.
/// - `thorough`: no filtering.
///
/// Sampled sentences keep their `original_index`.
pub fn sample_sentences(sentences: &[Sentence], mode: SpeedMode) -> Vec<Sentence> {
    let count = sentences.len();
    match mode {
        SpeedMode::Fast if count > FAST_THRESHOLD => sentences
            .iter()
            .enumerate()
            .filter(|(idx, _)| idx % 2 == 0)
            .map(|(_, s)| s.clone())
            .collect(),
        SpeedMode::Balanced if count > BALANCED_THRESHOLD => {
            let step = (count as f64 / (count as f64 * 0.7)).ceil() as usize;
            sentences
                .iter()
                .enumerate()
                .filter(|(idx, _)| idx % step == 0)
                .map(|(_, s)| s.clone())
                .collect()
        }
        _ => sentences.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sentences(count: usize) -> Vec<Sentence> {
        (0..count)
            .map(|i| Sentence {
                original_index: i,
                text: format!("This is placeholder sentence number {i} in the fixture."),
            })
            .collect()
    }

    #[test]
    fn test_fast_below_threshold_keeps_all() {
        let sentences = make_sentences(50);
        let sampled = sample_sentences(&sentences, SpeedMode::Fast);
        assert_eq!(sampled.len(), 50);
    }

    #[test]
    fn test_fast_above_threshold_keeps_even_indices() {
        let sentences = make_sentences(51);
        let sampled = sample_sentences(&sentences, SpeedMode::Fast);
        assert_eq!(sampled.len(), 26);
        assert!(sampled.iter().all(|s| s.original_index % 2 == 0));
        assert_eq!(sampled[0].original_index, 0);
        assert_eq!(sampled.last().unwrap().original_index, 50);
    }

    #[test]
    fn test_balanced_below_threshold_keeps_all() {
        let sentences = make_sentences(100);
        let sampled = sample_sentences(&sentences, SpeedMode::Balanced);
        assert_eq!(sampled.len(), 100);
    }

    #[test]
    fn test_balanced_above_threshold_strides() {
        let sentences = make_sentences(101);
        let sampled = sample_sentences(&sentences, SpeedMode::Balanced);
        // ceil(n / (n * 0.7)) == ceil(1/0.7) == 2 regardless of n.
        assert_eq!(sampled.len(), 51);
        assert!(sampled.iter().all(|s| s.original_index % 2 == 0));
    }

    #[test]
    fn test_thorough_never_samples() {
        let sentences = make_sentences(500);
        let sampled = sample_sentences(&sentences, SpeedMode::Thorough);
        assert_eq!(sampled.len(), 500);
    }

    #[test]
    fn test_indices_preserved() {
        let sentences = make_sentences(60);
        let sampled = sample_sentences(&sentences, SpeedMode::Fast);
        for s in &sampled {
            assert_eq!(
                sentences[s.original_index].text, s.text,
                "sampling must carry original indices, not renumber"
            );
        }
    }
}
