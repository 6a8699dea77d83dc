//! Centrality-based sentence ranking.
//!
//! Each sentence is scored by its mean cosine similarity to every other
//! sentence in the scored set (a one-shot centrality proxy, no iterative
//! graph solve), then adjusted by domain, position, and length heuristics.
//! The heuristics live in data tables ([`BoostTable`], [`DomainBoosts`])
//! passed through [`RankerConfig`], so alternate tables can be substituted
//! without touching the scoring algorithm.

use crate::nlp::tokenizer::tokenize_words;
use crate::pipeline::sampler::sample_sentences;
use crate::types::{Domain, Sentence, SentenceScore, Settings};
use crate::vectorize::similarity::cosine_similarity;
use crate::vectorize::tfidf::TfidfVectorizer;

/// Multiplier rules for one domain.
#[derive(Debug, Clone)]
pub struct BoostTable {
    /// Case-insensitive substrings that trigger the keyword multiplier.
    pub keywords: &'static [&'static str],
    pub keyword_multiplier: f64,
    /// Number of leading positions that receive the lead multiplier.
    pub lead_count: usize,
    pub lead_multiplier: f64,
}

impl BoostTable {
    const NONE: BoostTable = BoostTable {
        keywords: &[],
        keyword_multiplier: 1.0,
        lead_count: 0,
        lead_multiplier: 1.0,
    };
}

/// Boost tables for every [`Domain`].
#[derive(Debug, Clone)]
pub struct DomainBoosts {
    pub general: BoostTable,
    pub academic: BoostTable,
    pub legal: BoostTable,
    pub journalistic: BoostTable,
}

impl Default for DomainBoosts {
    fn default() -> Self {
        Self {
            general: BoostTable::NONE,
            academic: BoostTable {
                keywords: &[
                    "research",
                    "study",
                    "analysis",
                    "results",
                    "conclusion",
                    "findings",
                ],
                keyword_multiplier: 1.2,
                ..BoostTable::NONE
            },
            legal: BoostTable {
                keywords: &["shall", "hereby", "pursuant", "agreement", "party", "rights"],
                keyword_multiplier: 1.2,
                ..BoostTable::NONE
            },
            journalistic: BoostTable {
                // Lead-paragraph heuristic: the first three sentences carry
                // the story.
                lead_count: 3,
                lead_multiplier: 1.3,
                ..BoostTable::NONE
            },
        }
    }
}

impl DomainBoosts {
    /// Table for a given domain.
    pub fn table(&self, domain: Domain) -> &BoostTable {
        match domain {
            Domain::General => &self.general,
            Domain::Academic => &self.academic,
            Domain::Legal => &self.legal,
            Domain::Journalistic => &self.journalistic,
        }
    }
}

/// Configuration for sentence ranking.
#[derive(Debug, Clone)]
pub struct RankerConfig {
    pub boosts: DomainBoosts,
    /// Bonus for the first sentence of the scored set.
    pub first_bonus: f64,
    /// Bonus for the last sentence of the scored set.
    pub last_bonus: f64,
    /// Penalty applied outside the word-count band.
    pub length_penalty: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Lower bound on the number of selected summary sentences.
    pub min_selected: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            boosts: DomainBoosts::default(),
            first_bonus: 1.15,
            last_bonus: 1.10,
            length_penalty: 0.9,
            min_words: 8,
            max_words: 40,
            min_selected: 3,
        }
    }
}

/// Output of one ranking pass.
#[derive(Debug, Clone)]
pub struct RankOutput {
    /// Scores for every original sentence, in document order.
    pub scores: Vec<SentenceScore>,
    /// Selected summary sentences, re-sorted into reading order.
    pub selected: Vec<SentenceScore>,
}

/// Centrality-based sentence ranker.
#[derive(Debug, Clone, Default)]
pub struct SentenceRanker {
    config: RankerConfig,
}

impl SentenceRanker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RankerConfig) -> Self {
        Self { config }
    }

    /// Score a sentence set: fit a fresh vectorizer over the set, compute
    /// mean pairwise similarity per sentence, then apply the boost tables.
    ///
    /// Position-dependent modifiers (lead boost, first/last bonus) use the
    /// position within this set. Both first and last bonuses apply to a
    /// one-sentence set.
    pub fn score_sentences(&self, sentences: &[Sentence], domain: Domain) -> Vec<SentenceScore> {
        if sentences.is_empty() {
            return Vec::new();
        }

        let texts: Vec<String> = sentences.iter().map(|s| s.text.clone()).collect();
        let corpus: Vec<Vec<String>> = texts.iter().map(|t| tokenize_words(t)).collect();
        let vectorizer = TfidfVectorizer::fit(&corpus);
        let matrix = vectorizer.transform(&texts);

        let n = sentences.len();
        let denom = n.saturating_sub(1).max(1) as f64;
        let table = self.config.boosts.table(domain);

        sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| {
                let mut score = 0.0;
                for j in 0..n {
                    if i != j {
                        score += cosine_similarity(&matrix[i], &matrix[j]);
                    }
                }
                score /= denom;

                if !table.keywords.is_empty() {
                    let lower = sentence.text.to_lowercase();
                    if table.keywords.iter().any(|kw| lower.contains(kw)) {
                        score *= table.keyword_multiplier;
                    }
                }
                if i < table.lead_count {
                    score *= table.lead_multiplier;
                }

                if i == 0 {
                    score *= self.config.first_bonus;
                }
                if i + 1 == n {
                    score *= self.config.last_bonus;
                }

                let words = sentence.text.split_whitespace().count();
                if words < self.config.min_words || words > self.config.max_words {
                    score *= self.config.length_penalty;
                }

                SentenceScore {
                    sentence: sentence.text.clone(),
                    score,
                    original_index: sentence.original_index,
                }
            })
            .collect()
    }

    /// Rank sentences and select the summary subset.
    ///
    /// Selection runs over the (possibly sampled) set; the returned `scores`
    /// always cover the full set, recomputed without sampling when the
    /// sampler dropped sentences, so highlight selection sees every original
    /// sentence.
    pub fn rank(&self, sentences: &[Sentence], settings: &Settings) -> RankOutput {
        let total = sentences.len();
        let sampled = sample_sentences(sentences, settings.speed_mode);
        let sampled_scores = self.score_sentences(&sampled, settings.domain);

        let target = (total as f64 * settings.speed_mode.summary_fraction()).ceil() as usize;
        let num = target.max(self.config.min_selected).min(total);

        let mut by_score = sampled_scores.clone();
        sort_by_score_desc(&mut by_score);
        by_score.truncate(num.min(by_score.len()));

        let mut selected = by_score;
        selected.sort_by_key(|s| s.original_index);

        let scores = if sampled.len() == total {
            sampled_scores
        } else {
            self.score_sentences(sentences, settings.domain)
        };

        RankOutput { scores, selected }
    }
}

/// Sort scores descending, ties broken by ascending original index so that
/// duplicated sentences resolve deterministically.
pub(crate) fn sort_by_score_desc(scores: &mut [SentenceScore]) {
    scores.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.original_index.cmp(&b.original_index))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SpeedMode;

    fn sentence(index: usize, text: &str) -> Sentence {
        Sentence {
            original_index: index,
            text: text.to_string(),
        }
    }

    fn shared_vocab_doc() -> Vec<Sentence> {
        vec![
            sentence(0, "Machine learning systems analyze large document collections."),
            sentence(1, "Document collections grow as machine learning systems improve."),
            sentence(2, "Systems that analyze document collections need careful evaluation."),
            sentence(3, "Careful evaluation helps machine learning research overall."),
        ]
    }

    #[test]
    fn test_scores_cover_input() {
        let ranker = SentenceRanker::new();
        let doc = shared_vocab_doc();
        let scores = ranker.score_sentences(&doc, Domain::General);
        assert_eq!(scores.len(), 4);
        for (i, s) in scores.iter().enumerate() {
            assert_eq!(s.original_index, i);
            assert!(s.score.is_finite());
        }
    }

    #[test]
    fn test_academic_boost_strictly_higher() {
        let ranker = SentenceRanker::new();
        let mut doc = shared_vocab_doc();
        doc[2] = sentence(2, "The conclusion systems analyze document collections carefully.");

        let general = ranker.score_sentences(&doc, Domain::General);
        let academic = ranker.score_sentences(&doc, Domain::Academic);

        assert!(general[2].score > 0.0, "fixture must produce a nonzero base score");
        assert!(
            academic[2].score > general[2].score,
            "a sentence containing 'conclusion' must score strictly higher \
             under the academic domain"
        );
    }

    #[test]
    fn test_journalistic_lead_boost() {
        let ranker = SentenceRanker::new();
        let doc = shared_vocab_doc();
        let general = ranker.score_sentences(&doc, Domain::General);
        let journalistic = ranker.score_sentences(&doc, Domain::Journalistic);

        for i in 0..3 {
            assert!((journalistic[i].score - general[i].score * 1.3).abs() < 1e-9);
        }
        assert!((journalistic[3].score - general[3].score).abs() < 1e-12);
    }

    #[test]
    fn test_duplicated_sentences_tie_break() {
        let ranker = SentenceRanker::new();
        let text = "The same sentence repeated verbatim appears here again today.";
        let doc: Vec<Sentence> = (0..5).map(|i| sentence(i, text)).collect();

        let scores = ranker.score_sentences(&doc, Domain::General);
        // All pairwise similarities are 1, so base scores are identical;
        // only the first/last position bonuses differ.
        assert!((scores[1].score - scores[2].score).abs() < 1e-12);
        assert!((scores[2].score - scores[3].score).abs() < 1e-12);
        assert!(scores[0].score > scores[1].score);
        assert!(scores[4].score > scores[1].score);

        let settings = Settings {
            speed_mode: SpeedMode::Fast,
            ..Settings::default()
        };
        let output = ranker.rank(&doc, &settings);
        let picked: Vec<usize> = output.selected.iter().map(|s| s.original_index).collect();
        // Top-3: first (x1.15), last (x1.10), then the tie among 1..=3
        // resolves to the lowest original index.
        assert_eq!(picked, vec![0, 1, 4]);
    }

    #[test]
    fn test_selection_count_and_reading_order() {
        let ranker = SentenceRanker::new();
        let doc = shared_vocab_doc();
        let settings = Settings::default(); // balanced

        let output = ranker.rank(&doc, &settings);
        // clamp(ceil(4 * 0.35), 3, 4) == 3
        assert_eq!(output.selected.len(), 3);
        let indices: Vec<usize> = output.selected.iter().map(|s| s.original_index).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted, "summary selection must be in reading order");
        assert_eq!(output.scores.len(), 4);
    }

    #[test]
    fn test_small_document_selects_everything() {
        let ranker = SentenceRanker::new();
        let doc = vec![
            sentence(0, "Only one qualifying sentence exists in this document."),
            sentence(1, "And a second qualifying sentence closes the document."),
        ];
        let output = ranker.rank(&doc, &Settings::default());
        assert_eq!(output.selected.len(), 2);
    }

    #[test]
    fn test_single_sentence_gets_both_position_bonuses() {
        let ranker = SentenceRanker::new();
        let doc = vec![sentence(0, "A single lonely sentence makes a very short document.")];
        let scores = ranker.score_sentences(&doc, Domain::General);
        // Centrality over an empty neighbor set is 0; bonuses multiply 0.
        assert_eq!(scores[0].score, 0.0);
    }

    #[test]
    fn test_length_penalty_applied() {
        let ranker = SentenceRanker::new();
        // Two near-identical sentences; the short one has < 8 words.
        let doc = vec![
            sentence(0, "Shared vocabulary sentence number one talks about shared vocabulary."),
            sentence(1, "Shared vocabulary sentence here."),
        ];
        let scores = ranker.score_sentences(&doc, Domain::General);
        let words = doc[1].text.split_whitespace().count();
        assert!(words < 8);
        // Base centralities are equal (only two sentences); sentence 1 takes
        // the 0.9 penalty and the 1.10 last-bonus, sentence 0 takes 1.15.
        let base = scores[0].score / 1.15;
        assert!((scores[1].score - base * 1.10 * 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_full_scores_recomputed_when_sampled() {
        let ranker = SentenceRanker::new();
        let doc: Vec<Sentence> = (0..60)
            .map(|i| {
                sentence(
                    i,
                    &format!("Sentence number {i} shares plenty of vocabulary with the rest."),
                )
            })
            .collect();
        let settings = Settings {
            speed_mode: SpeedMode::Fast,
            ..Settings::default()
        };
        let output = ranker.rank(&doc, &settings);
        // Fast mode sampled 30 of 60, yet scores cover all 60.
        assert_eq!(output.scores.len(), 60);
        // ceil(60 * 0.25) == 15 selected.
        assert_eq!(output.selected.len(), 15);
    }
}
