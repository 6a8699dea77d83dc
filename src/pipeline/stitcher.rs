//! Rule-based abstractive stitching.
//!
//! A fixed, deterministic stand-in for model-based abstractive rewriting:
//! the selected summary sentences are joined and reshaped by three rules:
//! collapse immediately-repeated words, merge very short follow-on sentences
//! into their predecessor, and insert a transitional "Furthermore" at the
//! sentence-list midpoint. Outputs must match these exact transformations.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentence boundary followed by a short capitalized word (at most 4 chars).
static SHORT_FOLLOWON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.\s+([A-Z]\w{0,3}\s)").expect("valid regex"));

/// Word-character run, used for the repeated-word collapse.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Stitch the ordered selected sentences into a lightly-rewritten summary.
///
/// Callers invoke this only when abstractive mode is on and more than 3
/// sentences were selected; with fewer sentences the plain space-join is
/// used instead.
pub fn stitch(sentences: &[&str]) -> String {
    let joined = sentences.join(" ");
    let collapsed = collapse_repeated_words(&joined);
    let merged = SHORT_FOLLOWON.replace_all(&collapsed, ", $1").into_owned();
    insert_transition(&merged)
}

/// Collapse any whole word immediately repeated (case-insensitively, with
/// only whitespace between the occurrences) to a single occurrence.
fn collapse_repeated_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut prev: Option<(String, usize)> = None; // (lowercased word, end offset)

    for m in WORD.find_iter(text) {
        let lower = m.as_str().to_lowercase();
        if let Some((ref prev_word, prev_end)) = prev {
            let gap = &text[prev_end..m.start()];
            if *prev_word == lower && !gap.is_empty() && gap.chars().all(char::is_whitespace) {
                // Skip the repeat: copy up to the end of the previous word,
                // then resume after this occurrence.
                out.push_str(&text[copied..prev_end]);
                copied = m.end();
                prev = Some((lower, m.end()));
                continue;
            }
        }
        prev = Some((lower, m.end()));
    }
    out.push_str(&text[copied..]);
    out
}

/// Insert "Furthermore" as a new sentence-initial token at the midpoint of
/// the ". "-separated sentence list, when the list has more than 2 parts.
fn insert_transition(text: &str) -> String {
    let mut parts: Vec<&str> = text.split(". ").collect();
    if parts.len() > 2 {
        parts.insert(parts.len() / 2, "Furthermore");
    }
    parts.join(". ")
}
